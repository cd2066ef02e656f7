pub mod extractor;
pub mod keywords;
pub mod model;

use serde::{Deserialize, Serialize};

pub use extractor::ActionExtractor;
pub use model::{GeminiClient, LanguageModel, ModelError};

/// How a body part moves while an action plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionType {
    Linear,
    Circular,
    Wave,
    Wiggle,
    Bounce,
    EaseInOut,
    #[default]
    Static,
    Angled,
    #[serde(rename = "angled_45")]
    Angled45,
}

impl MotionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionType::Linear => "linear",
            MotionType::Circular => "circular",
            MotionType::Wave => "wave",
            MotionType::Wiggle => "wiggle",
            MotionType::Bounce => "bounce",
            MotionType::EaseInOut => "ease_in_out",
            MotionType::Static => "static",
            MotionType::Angled => "angled",
            MotionType::Angled45 => "angled_45",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationHint {
    Short,
    #[default]
    Medium,
    Long,
}

/// What a character should do while saying one line of dialogue.
///
/// Every field is optional on input so partial model replies still parse;
/// missing fields take the neutral defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionDescriptor {
    pub primary_action: String,
    pub sub_actions: Vec<String>,
    pub body_parts: Vec<String>,
    /// `None` when a model reply leaves the field out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_type: Option<MotionType>,
    pub emotion: String,
    pub duration_hint: DurationHint,
    pub props: Vec<String>,
    pub mouth_sync: bool,
    pub special_effects: Vec<String>,
}

impl Default for ActionDescriptor {
    fn default() -> Self {
        Self {
            primary_action: "idle".to_string(),
            sub_actions: Vec::new(),
            body_parts: Vec::new(),
            motion_type: Some(MotionType::Static),
            emotion: "neutral".to_string(),
            duration_hint: DurationHint::Medium,
            props: Vec::new(),
            mouth_sync: true,
            special_effects: Vec::new(),
        }
    }
}

impl ActionDescriptor {
    pub fn with_primary(action: &str) -> Self {
        Self {
            primary_action: action.to_string(),
            ..Self::default()
        }
    }

    /// True when any sub-action mentions `needle`, e.g. "bottom" in "brush_bottom_teeth".
    pub fn has_sub_action_containing(&self, needle: &str) -> bool {
        self.sub_actions.iter().any(|s| s.contains(needle))
    }
}
