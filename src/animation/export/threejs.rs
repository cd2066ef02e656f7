//! Three.js `AnimationClip` JSON: absolute times, one flattened value list per track.

use serde::Serialize;

use crate::animation::{Animation, PropertyValue};

#[derive(Debug, Clone, Serialize)]
pub struct Clip {
    pub name: String,
    pub duration: f64,
    pub tracks: Vec<ClipTrack>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClipTrack {
    /// `"target.property"`
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    pub times: Vec<f64>,
    pub values: Vec<PropertyValue>,
}

pub fn export(animation: &Animation) -> Clip {
    let tracks = animation
        .tracks
        .iter()
        .map(|track| ClipTrack {
            name: format!("{}.{}", track.target, track.property),
            value_type: "number",
            times: track
                .keyframes
                .iter()
                .map(|kf| kf.time * animation.duration)
                .collect(),
            values: track
                .keyframes
                .iter()
                .flat_map(|kf| kf.properties.iter().map(|(_, value)| value.clone()))
                .collect(),
        })
        .collect();

    Clip {
        name: animation.name.clone(),
        duration: animation.duration,
        tracks,
    }
}
