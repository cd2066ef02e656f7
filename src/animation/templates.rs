//! Hand-authored animation templates, one per primary action.
//!
//! Keyframe times and values are tuned by eye; each template is a pure
//! function of the descriptor and duration.

use super::{Animation, AnimationEvent, AnimationTrack, Keyframe, PropertyValue};
use crate::actions::{ActionDescriptor, MotionType};

pub type Template = fn(&ActionDescriptor, f64) -> Animation;

/// Action name to template. Unknown names fall back to `idle` in the engine.
pub const TEMPLATES: &[(&str, Template)] = &[
    ("idle", idle),
    ("wave", wave),
    ("greeting", wave),
    ("pickup", pickup_brush),
    ("rinsing", rinse),
    ("swishing", swish),
    ("spitting", spit),
    ("applying_paste", apply_paste),
    ("openMouth", open_mouth),
    ("brushing", brushing),
    ("tongueOut", tongue_out),
    ("celebrate", celebrate),
    ("thumbsUp", thumbs_up),
];

pub fn lookup(action: &str) -> Option<Template> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, template)| *template)
}

/// Breathing and blinking.
pub fn idle(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("idle", duration)
        .looped()
        .track(AnimationTrack::scalar(
            "body",
            "scale",
            &[(0.0, 1.0), (0.5, 1.02), (1.0, 1.0)],
        ))
        .track(AnimationTrack::scalar(
            "eyes",
            "blink",
            &[(0.0, 0.0), (0.45, 0.0), (0.5, 1.0), (0.55, 0.0), (1.0, 0.0)],
        ))
}

pub fn wave(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("wave", duration)
        .track(AnimationTrack::scalar(
            "right_arm",
            "rotation",
            &[
                (0.0, 30.0),
                (0.2, -120.0),
                (0.35, -100.0),
                (0.5, -120.0),
                (0.65, -100.0),
                (0.8, -120.0),
                (1.0, 30.0),
            ],
        ))
        .track(AnimationTrack::scalar(
            "mouth",
            "smile",
            &[(0.0, 0.5), (0.2, 1.0), (0.9, 1.0), (1.0, 0.5)],
        ))
}

/// Reach, grab, and show the toothbrush.
pub fn pickup_brush(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("pickup_brush", duration)
        .track(AnimationTrack::scalar(
            "right_arm",
            "rotation",
            &[(0.0, 30.0), (0.3, 60.0), (0.5, 45.0), (0.7, 20.0), (1.0, 30.0)],
        ))
        .track(AnimationTrack::scalar(
            "toothbrush",
            "visible",
            &[(0.0, 0.0), (0.5, 1.0), (1.0, 1.0)],
        ))
        .event(AnimationEvent::sound(0.5, "pickup_sound"))
}

/// Whole rinse: lift the cup, drink, swish, lean forward and spit.
pub fn rinse(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("rinsing", duration)
        .track(AnimationTrack::scalar(
            "left_arm",
            "rotation",
            &[
                (0.0, -30.0),
                (0.1, -60.0),
                (0.2, -90.0),
                (0.3, -120.0),
                (0.4, -130.0),
                (0.5, -90.0),
                (0.8, -60.0),
                (1.0, -30.0),
            ],
        ))
        .track(AnimationTrack::scalar(
            "cup",
            "visible",
            &[(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)],
        ))
        .track(AnimationTrack::scalar(
            "mouth",
            "puff",
            &[
                (0.0, 0.0),
                (0.35, 0.0),
                (0.4, 1.0),
                (0.5, 0.5),
                (0.6, 1.0),
                (0.7, 0.5),
                (0.8, 0.0),
                (1.0, 0.0),
            ],
        ))
        .track(AnimationTrack::scalar(
            "head",
            "rotation",
            &[(0.0, 0.0), (0.35, -15.0), (0.5, 0.0), (0.8, 20.0), (1.0, 0.0)],
        ))
        .event(AnimationEvent::sound(0.35, "gulp"))
        .event(AnimationEvent::sound(0.5, "swish"))
        .event(AnimationEvent::sound(0.85, "spit"))
        .event(AnimationEvent::particle(0.85, "water_splash"))
}

pub fn swish(_: &ActionDescriptor, duration: f64) -> Animation {
    let keyframes = [
        (0.0, 0.8, -10.0),
        (0.25, 1.0, 10.0),
        (0.5, 0.8, -10.0),
        (0.75, 1.0, 10.0),
        (1.0, 0.8, -10.0),
    ]
    .into_iter()
    .map(|(time, puff, offset)| Keyframe::new(time, [("puff", puff), ("offset_x", offset)]))
    .collect();

    Animation::new("swishing", duration)
        .looped()
        .track(AnimationTrack::new("mouth", "puff", keyframes))
}

pub fn spit(_: &ActionDescriptor, duration: f64) -> Animation {
    let mouth = [
        (0.0, 0.0, "puff"),
        (0.4, 0.3, "o"),
        (0.5, 0.8, "o"),
        (0.7, 0.2, "normal"),
        (1.0, 0.0, "smile"),
    ]
    .into_iter()
    .map(|(time, open, shape)| {
        Keyframe::new(
            time,
            [
                ("open", PropertyValue::from(open)),
                ("shape", PropertyValue::from(shape)),
            ],
        )
    })
    .collect();

    Animation::new("spitting", duration)
        .track(AnimationTrack::scalar(
            "body",
            "rotation",
            &[(0.0, 0.0), (0.3, 20.0), (0.5, 25.0), (1.0, 0.0)],
        ))
        .track(AnimationTrack::new("mouth", "open", mouth))
        .event(AnimationEvent::particle(0.5, "spit_bubbles"))
        .event(AnimationEvent::sound(0.5, "spit_sound"))
}

/// Right hand holds the brush out while the left squeezes the tube.
pub fn apply_paste(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("applying_paste", duration)
        .track(AnimationTrack::scalar(
            "right_arm",
            "rotation",
            &[(0.0, 30.0), (0.2, 0.0), (0.8, 0.0), (1.0, 30.0)],
        ))
        .track(AnimationTrack::scalar(
            "left_arm",
            "rotation",
            &[
                (0.0, -30.0),
                (0.2, -20.0),
                (0.4, -10.0),
                (0.6, -15.0),
                (0.8, -30.0),
                (1.0, -30.0),
            ],
        ))
        .track(AnimationTrack::scalar(
            "paste_blob",
            "scale",
            &[(0.0, 0.0), (0.3, 0.0), (0.5, 0.5), (0.7, 1.0), (1.0, 1.0)],
        ))
        .event(AnimationEvent::sound(0.5, "squeeze"))
}

/// Wide open mouth; a playful roar also throws the left arm up.
pub fn open_mouth(descriptor: &ActionDescriptor, duration: f64) -> Animation {
    let anim = Animation::new("openMouth", duration)
        .track(AnimationTrack::scalar(
            "mouth",
            "open",
            &[(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.3)],
        ))
        .track(AnimationTrack::scalar(
            "head",
            "rotation",
            &[(0.0, 0.0), (0.3, -10.0), (0.7, -10.0), (1.0, 0.0)],
        ));

    if descriptor.emotion == "playful" {
        return anim.track(AnimationTrack::scalar(
            "left_arm",
            "rotation",
            &[(0.0, -30.0), (0.3, -120.0), (0.7, -120.0), (1.0, -30.0)],
        ));
    }
    anim
}

/// Brush position for the area being brushed. Checked in order; first hit wins.
fn brush_origin(descriptor: &ActionDescriptor) -> (f64, f64) {
    let (x, y) = (60.0, 50.0);
    if descriptor.has_sub_action_containing("bottom") {
        (x, 30.0)
    } else if descriptor.has_sub_action_containing("top") {
        (x, 70.0)
    } else if descriptor.has_sub_action_containing("front") {
        (40.0, y)
    } else if descriptor.has_sub_action_containing("molar") {
        (80.0, y)
    } else {
        (x, y)
    }
}

fn brush_position(points: &[(f64, f64, f64)]) -> AnimationTrack {
    let keyframes = points
        .iter()
        .map(|&(time, x, y)| Keyframe::new(time, [("x", x), ("y", y)]))
        .collect();
    AnimationTrack::new("toothbrush", "position", keyframes)
}

pub fn brushing(descriptor: &ActionDescriptor, duration: f64) -> Animation {
    // An unspecified motion brushes up and down.
    let motion = descriptor.motion_type.unwrap_or(MotionType::Linear);
    let (x, y) = brush_origin(descriptor);
    let mut anim = Animation::new(&format!("brushing_{}", motion.as_str()), duration).looped();

    match motion {
        MotionType::Circular => {
            anim = anim.track(brush_position(&[
                (0.0, x, y),
                (0.25, x + 5.0, y + 5.0),
                (0.5, x, y + 8.0),
                (0.75, x - 5.0, y + 5.0),
                (1.0, x, y),
            ]));
        }
        MotionType::Wiggle => {
            anim = anim.track(AnimationTrack::scalar(
                "toothbrush",
                "rotation",
                &[(0.0, -10.0), (0.25, 10.0), (0.5, -10.0), (0.75, 10.0), (1.0, -10.0)],
            ));
        }
        MotionType::Angled45 => {
            anim = anim
                .track(AnimationTrack::scalar(
                    "toothbrush",
                    "rotation",
                    &[(0.0, 45.0), (1.0, 45.0)],
                ))
                .track(AnimationTrack::keyed(
                    "right_arm",
                    "position",
                    "y",
                    &[(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)],
                ));
        }
        _ => {
            anim = anim.track(brush_position(&[
                (0.0, x, y),
                (0.5, x, y + 15.0),
                (1.0, x, y),
            ]));
        }
    }

    anim.track(AnimationTrack::scalar(
        "right_arm",
        "rotation",
        &[(0.0, -45.0), (0.5, -55.0), (1.0, -45.0)],
    ))
    .event(AnimationEvent::sound(0.0, "brush_loop").looping())
}

pub fn tongue_out(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("tongueOut", duration)
        .track(AnimationTrack::scalar(
            "tongue",
            "out",
            &[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)],
        ))
        .track(AnimationTrack::scalar(
            "mouth",
            "open",
            &[(0.0, 0.0), (0.2, 0.5), (0.8, 0.5), (1.0, 0.0)],
        ))
}

/// Crouch, jump with both arms up, land.
pub fn celebrate(_: &ActionDescriptor, duration: f64) -> Animation {
    Animation::new("celebrate", duration)
        .track(AnimationTrack::keyed(
            "body",
            "position",
            "y",
            &[
                (0.0, 0.0),
                (0.2, -20.0),
                (0.4, 30.0),
                (0.6, 20.0),
                (0.8, 0.0),
                (1.0, 0.0),
            ],
        ))
        .track(AnimationTrack::scalar(
            "left_arm",
            "rotation",
            &[(0.0, -30.0), (0.3, -150.0), (0.8, -150.0), (1.0, -30.0)],
        ))
        .track(AnimationTrack::scalar(
            "right_arm",
            "rotation",
            &[(0.0, 30.0), (0.3, 150.0), (0.8, 150.0), (1.0, 30.0)],
        ))
        .track(AnimationTrack::scalar(
            "mouth",
            "smile",
            &[(0.0, 0.5), (0.3, 1.0), (1.0, 1.0)],
        ))
        .event(AnimationEvent::particle(0.3, "confetti"))
        .event(AnimationEvent::sound(0.3, "celebration"))
}

pub fn thumbs_up(_: &ActionDescriptor, duration: f64) -> Animation {
    let gesture = [(0.0, "open"), (0.25, "thumbsUp"), (0.85, "thumbsUp"), (1.0, "open")]
        .into_iter()
        .map(|(time, gesture)| Keyframe::new(time, [("gesture", gesture)]))
        .collect();

    Animation::new("thumbsUp", duration)
        .track(AnimationTrack::scalar(
            "right_arm",
            "rotation",
            &[(0.0, 30.0), (0.3, -60.0), (0.7, -60.0), (1.0, 30.0)],
        ))
        .track(AnimationTrack::new("right_hand", "gesture", gesture))
}
