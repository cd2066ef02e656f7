pub mod handlers;
pub mod routes;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::actions::ActionDescriptor;
use crate::animation::body::PoseValue;
use crate::animation::ExportFormat;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub dialogue: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Deserialize)]
pub struct AnimateRequest {
    pub dialogue: String,
    #[serde(default)]
    pub context: String,
    pub duration: Option<f64>,
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Serialize)]
pub struct AnimateResponse {
    pub actions: ActionDescriptor,
    pub format: ExportFormat,
    pub animation: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<&'static str>,
    pub body_parts: IndexMap<&'static str, IndexMap<&'static str, PoseValue>>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: bool,
}
