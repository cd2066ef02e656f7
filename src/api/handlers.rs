use axum::{extract::State, Json};
use std::sync::Arc;

use super::{
    AnimateRequest, AnimateResponse, ExtractRequest, HealthResponse, TemplatesResponse,
};
use crate::actions::ActionDescriptor;
use crate::animation::{body::body_part_defaults, templates::TEMPLATES};
use crate::api::routes::AppState;
use crate::error::AppError;

const MAX_DIALOGUE_CHARS: usize = 10000;
const DEFAULT_DURATION_SECS: f64 = 5.0;

fn validate_dialogue(dialogue: &str) -> Result<(), AppError> {
    if dialogue.trim().is_empty() {
        return Err(AppError::BadRequest("Dialogue cannot be empty".into()));
    }

    if dialogue.chars().count() > MAX_DIALOGUE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Dialogue too long (max {} chars)",
            MAX_DIALOGUE_CHARS
        )));
    }

    Ok(())
}

pub async fn extract(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ActionDescriptor>, AppError> {
    validate_dialogue(&request.dialogue)?;

    let descriptor = state
        .extractor
        .extract(&request.dialogue, &request.context)
        .await;
    Ok(Json(descriptor))
}

pub async fn animate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnimateRequest>,
) -> Result<Json<AnimateResponse>, AppError> {
    validate_dialogue(&request.dialogue)?;

    let duration = request.duration.unwrap_or(DEFAULT_DURATION_SECS);
    if !duration.is_finite() || duration <= 0.0 {
        return Err(AppError::BadRequest(
            "Duration must be a positive number of seconds".into(),
        ));
    }

    let actions = state
        .extractor
        .extract(&request.dialogue, &request.context)
        .await;
    let animation = state.engine.generate(&actions, duration);
    let data = state.engine.export(&animation, request.format)?;

    Ok(Json(AnimateResponse {
        actions,
        format: request.format,
        animation: data,
    }))
}

pub async fn list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: TEMPLATES.iter().map(|(name, _)| *name).collect(),
        body_parts: body_part_defaults(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.extractor.has_model(),
    })
}
