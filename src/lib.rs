//! Procedural character animations for the ToothBuddy brushing coach.
//!
//! Storyboard dialogue is read into [`actions::ActionDescriptor`]s, turned
//! into keyframe [`animation::Animation`]s by the template library, and
//! written out as Lottie or Three.js JSON by the [`pipeline`].

pub mod actions;
pub mod animation;
pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod storyboard;
