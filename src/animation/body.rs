//! Default poses for the avatar rig. Reference data only: tracks may target
//! parts that are not listed here (eyes, paste_blob, right_hand).

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PoseValue {
    Number(f64),
    Flag(bool),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodyPart {
    pub name: &'static str,
    pub defaults: &'static [(&'static str, PoseValue)],
}

use PoseValue::{Flag, Number};

pub const BODY_PARTS: &[BodyPart] = &[
    BodyPart {
        name: "head",
        defaults: &[("x", Number(0.0)), ("y", Number(100.0)), ("rotation", Number(0.0))],
    },
    BodyPart {
        name: "mouth",
        defaults: &[("open", Number(0.0)), ("smile", Number(0.5))],
    },
    BodyPart {
        name: "tongue",
        defaults: &[("out", Number(0.0)), ("x", Number(0.0))],
    },
    BodyPart {
        name: "left_arm",
        defaults: &[("rotation", Number(-30.0)), ("x", Number(-50.0))],
    },
    BodyPart {
        name: "right_arm",
        defaults: &[("rotation", Number(30.0)), ("x", Number(50.0))],
    },
    BodyPart {
        name: "toothbrush",
        defaults: &[
            ("x", Number(60.0)),
            ("y", Number(50.0)),
            ("rotation", Number(0.0)),
            ("visible", Flag(false)),
        ],
    },
    BodyPart {
        name: "cup",
        defaults: &[("x", Number(-60.0)), ("y", Number(40.0)), ("visible", Flag(false))],
    },
    BodyPart {
        name: "body",
        defaults: &[("y", Number(0.0)), ("scale", Number(1.0))],
    },
];

/// Rig defaults keyed by part, then attribute, in declaration order.
pub fn body_part_defaults() -> IndexMap<&'static str, IndexMap<&'static str, PoseValue>> {
    BODY_PARTS
        .iter()
        .map(|part| (part.name, part.defaults.iter().copied().collect()))
        .collect()
}
