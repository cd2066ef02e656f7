use super::export::{self, ExportFormat};
use super::templates::{self, Template};
use super::Animation;
use crate::actions::ActionDescriptor;
use crate::error::AppError;

/// Sub-action layers run at this fraction of the primary duration.
const SUB_ACTION_SCALE: f64 = 0.3;

/// Builds animations from action descriptors.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationEngine;

impl AnimationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Primary template plus the tracks of every sub-action that names a template.
    /// Sub-action events are dropped.
    pub fn generate(&self, descriptor: &ActionDescriptor, duration: f64) -> Animation {
        let template: Template =
            templates::lookup(&descriptor.primary_action).unwrap_or(templates::idle);
        let mut animation = template(descriptor, duration);

        for sub_action in &descriptor.sub_actions {
            if let Some(sub_template) = templates::lookup(sub_action) {
                let layer = sub_template(descriptor, duration * SUB_ACTION_SCALE);
                tracing::debug!(sub_action = %sub_action, tracks = layer.tracks.len(), "Layering sub-action");
                animation.tracks.extend(layer.tracks);
            }
        }

        animation
    }

    pub fn export(
        &self,
        animation: &Animation,
        format: ExportFormat,
    ) -> Result<serde_json::Value, AppError> {
        let value = match format {
            ExportFormat::Lottie => serde_json::to_value(export::lottie::export(animation)?)?,
            ExportFormat::Threejs => serde_json::to_value(export::threejs::export(animation))?,
        };
        Ok(value)
    }
}
