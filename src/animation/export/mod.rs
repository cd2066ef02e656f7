pub mod lottie;
pub mod threejs;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output formats for front-end players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Frame-indexed hold keyframes.
    Lottie,
    /// Absolute-time AnimationClip tracks.
    #[default]
    Threejs,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Lottie => f.write_str("lottie"),
            ExportFormat::Threejs => f.write_str("threejs"),
        }
    }
}
