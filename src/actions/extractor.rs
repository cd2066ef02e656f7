use std::path::Path;

use super::keywords::match_keywords;
use super::model::LanguageModel;
use super::ActionDescriptor;
use crate::error::AppError;
use crate::storyboard::{self, Scene};

/// Turns dialogue into an [`ActionDescriptor`].
///
/// Uses the language model when one is configured and falls back to keyword
/// matching on any model or parse failure. Extraction itself never fails.
pub struct ActionExtractor {
    model: Option<Box<dyn LanguageModel>>,
}

impl ActionExtractor {
    pub fn new(model: Option<Box<dyn LanguageModel>>) -> Self {
        Self { model }
    }

    /// Keyword matching only.
    pub fn offline() -> Self {
        Self { model: None }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub async fn extract(&self, dialogue: &str, context: &str) -> ActionDescriptor {
        let Some(model) = &self.model else {
            return match_keywords(dialogue);
        };

        let prompt = build_prompt(dialogue, context);
        let reply = match model.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Model extraction failed, using keywords: {}", e);
                return match_keywords(dialogue);
            }
        };

        match serde_json::from_str::<ActionDescriptor>(strip_code_fence(&reply)) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!("Model reply was not a descriptor, using keywords: {}", e);
                match_keywords(dialogue)
            }
        }
    }

    /// Parse a storyboard file into scenes, extracting actions row by row.
    pub async fn parse_storyboard(&self, path: &Path) -> Result<Vec<Scene>, AppError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::StoryboardNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut scenes = Vec::new();
        for row in storyboard::parse_rows(&content) {
            let context = format!("{}: {}", row.character.id(), row.step_name);
            let actions = self.extract(&row.dialogue, &context).await;
            scenes.push(Scene::from_row(row, actions));
        }

        Ok(scenes)
    }
}

fn build_prompt(dialogue: &str, context: &str) -> String {
    format!(
        r#"Analyze this dialogue from a dental hygiene avatar app and extract animation instructions.

Context: {context}
Dialogue: "{dialogue}"

Return a JSON object with:
{{
    "primary_action": "main animation action",
    "sub_actions": ["list", "of", "sequential", "sub-actions"],
    "body_parts": ["mouth", "arm", "tongue", etc.],
    "motion_type": "linear|circular|wave|wiggle|bounce|ease_in_out|static|angled|angled_45",
    "emotion": "happy|excited|calm|encouraging",
    "duration_hint": "short|medium|long",
    "props": ["toothbrush", "cup", "paste", etc.],
    "mouth_sync": true/false,
    "special_effects": ["sparkles", "bubbles", etc.]
}}

Only return valid JSON, no explanation."#
    )
}

/// Unwrap a reply like "```json\n{...}\n```" to its body.
fn strip_code_fence(reply: &str) -> &str {
    let text = reply.trim();
    if !text.starts_with("```") {
        return text;
    }
    let inner = text.split("```").nth(1).unwrap_or("");
    inner.strip_prefix("json").unwrap_or(inner).trim()
}
