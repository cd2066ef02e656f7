//! Lottie-style document: one shape layer per track, keyframes as frame holds.
//!
//! Only the first property of each keyframe survives, and every keyframe gets
//! the same easing handles whatever its own easing says.

use indexmap::IndexMap;
use serde::Serialize;

use crate::animation::{Animation, PropertyValue};
use crate::error::AppError;

pub const FPS: u32 = 30;
const VERSION: &str = "5.7.4";
const CANVAS_SIZE: u32 = 512;
const SHAPE_LAYER: u8 = 4;

#[derive(Debug, Clone, Serialize)]
pub struct LottieDocument {
    pub v: &'static str,
    pub fr: u32,
    pub ip: u64,
    pub op: u64,
    pub w: u32,
    pub h: u32,
    pub nm: String,
    pub layers: Vec<LottieLayer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LottieLayer {
    pub nm: String,
    pub ty: u8,
    pub ks: IndexMap<String, AnimatedProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnimatedProperty {
    pub a: u8,
    pub k: Vec<LottieKeyframe>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LottieKeyframe {
    pub t: u64,
    pub s: [PropertyValue; 1],
    pub e: [PropertyValue; 1],
    pub i: EasingHandle,
    pub o: EasingHandle,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EasingHandle {
    pub x: [f64; 1],
    pub y: [u8; 1],
}

const EASE_IN: EasingHandle = EasingHandle { x: [0.4], y: [0] };
const EASE_OUT: EasingHandle = EasingHandle { x: [0.6], y: [1] };

pub fn total_frames(duration: f64) -> u64 {
    (duration * FPS as f64).floor() as u64
}

pub fn frame_at(time: f64, total_frames: u64) -> u64 {
    (time * total_frames as f64).floor() as u64
}

pub fn export(animation: &Animation) -> Result<LottieDocument, AppError> {
    let op = total_frames(animation.duration);
    let mut layers = Vec::with_capacity(animation.tracks.len());

    for track in &animation.tracks {
        let mut frames = Vec::with_capacity(track.keyframes.len());
        for (index, keyframe) in track.keyframes.iter().enumerate() {
            let value = keyframe
                .first_value()
                .ok_or_else(|| AppError::EmptyKeyframe {
                    track: format!("{}.{}", track.target, track.property),
                    index,
                })?;
            frames.push(LottieKeyframe {
                t: frame_at(keyframe.time, op),
                s: [value.clone()],
                e: [value.clone()],
                i: EASE_IN,
                o: EASE_OUT,
            });
        }

        let mut ks = IndexMap::new();
        ks.insert(track.property.clone(), AnimatedProperty { a: 1, k: frames });
        layers.push(LottieLayer {
            nm: track.target.clone(),
            ty: SHAPE_LAYER,
            ks,
        });
    }

    Ok(LottieDocument {
        v: VERSION,
        fr: FPS,
        ip: 0,
        op,
        w: CANVAS_SIZE,
        h: CANVAS_SIZE,
        nm: animation.name.clone(),
        layers,
    })
}
