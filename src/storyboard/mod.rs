pub mod parser;

use serde::Serialize;

use crate::actions::ActionDescriptor;

pub use parser::{parse_rows, StoryboardRow};

/// Characters a storyboard section can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Luna,
    Captain,
    DrBright,
}

impl Character {
    /// Recognise a character from a section heading. Case-sensitive.
    pub fn from_heading(heading: &str) -> Option<Self> {
        if heading.contains("Luna") {
            Some(Character::Luna)
        } else if heading.contains("Captain") {
            Some(Character::Captain)
        } else if heading.contains("Dr.") {
            Some(Character::DrBright)
        } else {
            None
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Character::Luna => "luna",
            Character::Captain => "captain",
            Character::DrBright => "dr_bright",
        }
    }

    pub fn context(&self) -> &'static str {
        match self {
            Character::Luna => "gentle fairy for toddlers ages 1-4",
            Character::Captain => "energetic hero for kids ages 5-11",
            Character::DrBright => "professional doctor for teens ages 12-18",
        }
    }
}

/// One storyboard row with its extracted actions.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub id: String,
    pub character: String,
    pub step: String,
    pub step_name: String,
    pub dialogue: String,
    pub animation_hint: String,
    pub duration: f64,
    pub actions: ActionDescriptor,
    pub context: String,
}

impl Scene {
    pub fn from_row(row: StoryboardRow, actions: ActionDescriptor) -> Self {
        Self {
            id: format!("{}_{}", row.character.id(), row.step),
            character: row.character.id().to_string(),
            step: row.step,
            step_name: row.step_name,
            dialogue: row.dialogue,
            animation_hint: row.animation_hint,
            duration: row.duration,
            actions,
            context: row.character.context().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_map_to_characters() {
        assert_eq!(Character::from_heading("## Luna the Tooth Fairy"), Some(Character::Luna));
        assert_eq!(Character::from_heading("## Captain Sparkle"), Some(Character::Captain));
        assert_eq!(Character::from_heading("## Dr. Bright"), Some(Character::DrBright));
        assert_eq!(Character::from_heading("## luna"), None);
        assert_eq!(Character::from_heading("## Notes"), None);
    }

    #[test]
    fn scene_id_combines_character_and_step() {
        let row = StoryboardRow {
            character: Character::DrBright,
            step: "3".into(),
            step_name: "Rinse".into(),
            duration: 10.0,
            animation_hint: "rinse".into(),
            dialogue: "Rinse well".into(),
        };
        let scene = Scene::from_row(row, ActionDescriptor::default());
        assert_eq!(scene.id, "dr_bright_3");
        assert_eq!(scene.character, "dr_bright");
        assert_eq!(scene.context, "professional doctor for teens ages 12-18");
    }
}
