use super::{ActionDescriptor, MotionType};

/// Overrides applied when `keyword` appears in the lowercased dialogue.
/// Empty slices and `None` leave the default untouched.
struct Rule {
    keyword: &'static str,
    primary_action: &'static str,
    sub_actions: &'static [&'static str],
    body_parts: &'static [&'static str],
    motion_type: Option<MotionType>,
    emotion: Option<&'static str>,
    props: &'static [&'static str],
    special_effects: &'static [&'static str],
}

impl Rule {
    const fn new(keyword: &'static str, primary_action: &'static str) -> Self {
        Self {
            keyword,
            primary_action,
            sub_actions: &[],
            body_parts: &[],
            motion_type: None,
            emotion: None,
            props: &[],
            special_effects: &[],
        }
    }

    const fn sub_actions(mut self, sub_actions: &'static [&'static str]) -> Self {
        self.sub_actions = sub_actions;
        self
    }

    const fn body_parts(mut self, body_parts: &'static [&'static str]) -> Self {
        self.body_parts = body_parts;
        self
    }

    const fn motion(mut self, motion: MotionType) -> Self {
        self.motion_type = Some(motion);
        self
    }

    const fn emotion(mut self, emotion: &'static str) -> Self {
        self.emotion = Some(emotion);
        self
    }

    const fn props(mut self, props: &'static [&'static str]) -> Self {
        self.props = props;
        self
    }

    const fn effects(mut self, effects: &'static [&'static str]) -> Self {
        self.special_effects = effects;
        self
    }

    fn apply(&self, descriptor: &mut ActionDescriptor) {
        descriptor.primary_action = self.primary_action.to_string();
        if !self.sub_actions.is_empty() {
            descriptor.sub_actions = to_strings(self.sub_actions);
        }
        if !self.body_parts.is_empty() {
            descriptor.body_parts = to_strings(self.body_parts);
        }
        if let Some(motion) = self.motion_type {
            descriptor.motion_type = Some(motion);
        }
        if let Some(emotion) = self.emotion {
            descriptor.emotion = emotion.to_string();
        }
        if !self.props.is_empty() {
            descriptor.props = to_strings(self.props);
        }
        if !self.special_effects.is_empty() {
            descriptor.special_effects = to_strings(self.special_effects);
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Order matters: the first keyword found in the dialogue wins, so "45" only
// applies when none of the words above it appear.
const RULES: &[Rule] = &[
    Rule::new("pick up", "pickup").props(&["toothbrush"]),
    Rule::new("rinse", "rinsing").sub_actions(&["drink", "swish", "spit"]),
    Rule::new("swish", "swishing").body_parts(&["cheeks", "mouth"]),
    Rule::new("spit", "spitting").body_parts(&["mouth"]),
    Rule::new("paste", "applying_paste").props(&["toothpaste", "toothbrush"]),
    Rule::new("roar", "openMouth").emotion("playful"),
    Rule::new("open wide", "openMouth").body_parts(&["mouth"]),
    Rule::new("bottom", "brushing").sub_actions(&["brush_bottom_teeth"]),
    Rule::new("top", "brushing").sub_actions(&["brush_top_teeth"]),
    Rule::new("front", "brushing").sub_actions(&["brush_front_teeth"]),
    Rule::new("tongue", "tongueOut").sub_actions(&["brush_tongue"]),
    Rule::new("molar", "brushing").sub_actions(&["brush_molars"]),
    Rule::new("wiggle", "brushing").motion(MotionType::Wiggle),
    Rule::new("circular", "brushing").motion(MotionType::Circular),
    Rule::new("angle", "brushing").motion(MotionType::Angled),
    Rule::new("45", "brushing").motion(MotionType::Angled45),
    Rule::new("celebrate", "celebrate").emotion("excited"),
    Rule::new("hooray", "celebrate").effects(&["sparkles"]),
    Rule::new("wave", "wave").body_parts(&["arm"]),
    Rule::new("morning", "greeting").emotion("happy"),
    Rule::new("night", "greeting").emotion("calm"),
];

/// Keyword-based extraction used when no model is configured or the model fails.
pub fn match_keywords(dialogue: &str) -> ActionDescriptor {
    let lowered = dialogue.to_lowercase();
    let mut descriptor = ActionDescriptor::default();

    if let Some(rule) = RULES.iter().find(|rule| lowered.contains(rule.keyword)) {
        tracing::debug!(keyword = rule.keyword, "Keyword rule matched");
        rule.apply(&mut descriptor);
    }

    descriptor
}
