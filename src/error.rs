use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Storyboard not found: {}", .0.display())]
    StoryboardNotFound(PathBuf),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Keyframe {index} of track '{track}' has no properties")]
    EmptyKeyframe { track: String, index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::StoryboardNotFound(_) => (StatusCode::NOT_FOUND, "STORYBOARD_NOT_FOUND"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::EmptyKeyframe { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_KEYFRAME")
            }
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AppError::JsonError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "JSON_ERROR"),
        };
        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        };

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
