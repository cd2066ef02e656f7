use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::actions::ActionExtractor;
use crate::animation::AnimationEngine;

pub struct AppState {
    pub extractor: ActionExtractor,
    pub engine: AnimationEngine,
}

/// API routes under `/api`; anything else is served from `assets_dir`.
pub fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/extract", post(handlers::extract))
        .route("/animate", post(handlers::animate))
        .route("/templates", get(handlers::list_templates))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(assets_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router(dir: &Path) -> Router {
        let state = Arc::new(AppState {
            extractor: ActionExtractor::offline(),
            engine: AnimationEngine::new(),
        });
        create_router(state, dir)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_offline_model() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/api/health").body(Body::empty()).unwrap();
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["model"], false);
    }

    #[tokio::test]
    async fn lists_templates_and_body_parts() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/api/templates").body(Body::empty()).unwrap();
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["templates"].as_array().unwrap().len(), 13);
        assert_eq!(json["body_parts"]["right_arm"]["rotation"], 30.0);
        assert_eq!(json["body_parts"]["cup"]["visible"], false);
    }

    #[tokio::test]
    async fn extract_uses_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let request = post_json(
            "/api/extract",
            serde_json::json!({"dialogue": "Pick up your toothbrush"}),
        );
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["primary_action"], "pickup");
        assert_eq!(json["props"], serde_json::json!(["toothbrush"]));
    }

    #[tokio::test]
    async fn animate_defaults_to_threejs() {
        let dir = tempfile::tempdir().unwrap();
        let request = post_json(
            "/api/animate",
            serde_json::json!({"dialogue": "Let's wave hello", "duration": 4.0}),
        );
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["format"], "threejs");
        assert_eq!(json["animation"]["duration"], 4.0);
        assert_eq!(json["animation"]["tracks"][0]["name"], "right_arm.rotation");
    }

    #[tokio::test]
    async fn animate_lottie() {
        let dir = tempfile::tempdir().unwrap();
        let request = post_json(
            "/api/animate",
            serde_json::json!({"dialogue": "Hooray!", "format": "lottie"}),
        );
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["animation"]["op"], 150);
        assert_eq!(json["actions"]["primary_action"], "celebrate");
    }

    #[tokio::test]
    async fn animate_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let request = post_json("/api/animate", serde_json::json!({"dialogue": ""}));
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");

        let request = post_json(
            "/api/animate",
            serde_json::json!({"dialogue": "wave", "duration": 0.0}),
        );
        let (status, _) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serves_exported_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("manifest.json"), r#"{"version": "1.0"}"#).unwrap();
        let request = Request::get("/manifest.json").body(Body::empty()).unwrap();
        let (status, json) = send(router(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["version"], "1.0");
    }
}
