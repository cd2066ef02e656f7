//! Storyboard to animation files, end to end.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::actions::{ActionDescriptor, ActionExtractor};
use crate::animation::export::threejs::{self, Clip};
use crate::animation::{Animation, AnimationEngine, ExportFormat};
use crate::error::AppError;
use crate::storyboard::Scene;

pub const MANIFEST_FILE: &str = "manifest.json";
const MANIFEST_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub version: &'static str,
    pub format: ExportFormat,
    pub animations: IndexMap<String, ManifestEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub file: String,
    pub duration: f64,
    #[serde(rename = "loop")]
    pub looping: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub characters: IndexMap<String, CharacterTimeline>,
    /// Length of the longest character timeline; characters play side by side.
    /// Earlier exports of this format always wrote 0 here.
    pub total_duration: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CharacterTimeline {
    pub scenes: Vec<TimelineScene>,
    pub total_duration: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineScene {
    pub id: String,
    pub step: String,
    pub dialogue: String,
    pub start_time: f64,
    pub duration: f64,
    pub animation: Clip,
    pub actions: ActionDescriptor,
}

/// Drives extraction and generation for a storyboard, then writes the results.
pub struct AnimationGenerator {
    extractor: ActionExtractor,
    engine: AnimationEngine,
    scenes: Vec<Scene>,
    animations: IndexMap<String, Animation>,
}

impl AnimationGenerator {
    pub fn new(extractor: ActionExtractor) -> Self {
        Self {
            extractor,
            engine: AnimationEngine::new(),
            scenes: Vec::new(),
            animations: IndexMap::new(),
        }
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn animations(&self) -> &IndexMap<String, Animation> {
        &self.animations
    }

    pub async fn process(&mut self, path: &Path) -> Result<&IndexMap<String, Animation>, AppError> {
        tracing::info!("Parsing storyboard: {}", path.display());
        self.scenes = self.extractor.parse_storyboard(path).await?;
        tracing::info!("Found {} scenes", self.scenes.len());

        self.animations.clear();
        for scene in &self.scenes {
            let mut animation = self.engine.generate(&scene.actions, scene.duration);
            animation.name = scene.id.clone();
            tracing::info!("Generated {}: {}", scene.id, scene.actions.primary_action);
            self.animations.insert(scene.id.clone(), animation);
        }

        Ok(&self.animations)
    }

    /// Write `{scene_id}.json` per animation plus `manifest.json`. Existing files are overwritten.
    pub fn export_all(&self, dir: &Path, format: ExportFormat) -> Result<Manifest, AppError> {
        fs::create_dir_all(dir)?;

        let mut manifest = Manifest {
            version: MANIFEST_VERSION,
            format,
            animations: IndexMap::new(),
        };

        for (scene_id, animation) in &self.animations {
            let data = self.engine.export(animation, format)?;
            let file = format!("{}.json", scene_id);
            fs::write(dir.join(&file), serde_json::to_string_pretty(&data)?)?;

            manifest.animations.insert(
                scene_id.clone(),
                ManifestEntry {
                    file,
                    duration: animation.duration,
                    looping: animation.looping,
                },
            );
        }

        fs::write(dir.join(MANIFEST_FILE), serde_json::to_string_pretty(&manifest)?)?;
        tracing::info!(
            "Exported {} animations to {}",
            self.animations.len(),
            dir.display()
        );

        Ok(manifest)
    }

    /// Write one document with every character's scenes placed back to back.
    pub fn export_combined_timeline(&self, path: &Path) -> Result<Timeline, AppError> {
        let timeline = self.build_timeline();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&timeline)?)?;
        tracing::info!("Exported combined timeline to {}", path.display());

        Ok(timeline)
    }

    fn build_timeline(&self) -> Timeline {
        let mut characters: IndexMap<String, CharacterTimeline> = IndexMap::new();

        for scene in &self.scenes {
            let Some(animation) = self.animations.get(&scene.id) else {
                continue;
            };
            let entry = characters.entry(scene.character.clone()).or_default();
            entry.scenes.push(TimelineScene {
                id: scene.id.clone(),
                step: scene.step_name.clone(),
                dialogue: scene.dialogue.clone(),
                start_time: entry.total_duration,
                duration: scene.duration,
                animation: threejs::export(animation),
                actions: scene.actions.clone(),
            });
            entry.total_duration += scene.duration;
        }

        let total_duration = characters
            .values()
            .map(|c| c.total_duration)
            .fold(0.0, f64::max);

        Timeline {
            characters,
            total_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORYBOARD: &str = "\
## Luna

| Step | Name | Duration | Animation | Dialogue |
|------|------|----------|-----------|----------|
| 1 | Intro | 5s | wave | Hi there, let's wave! |
| 2 | Paste | 3s | paste | A little dab of paste |
| 3 | Brush | 7s | brush | Brush the bottom teeth |

## Captain Sparkle

| 1 | Rinse | 10s | rinse | Now rinse and spit! |
";

    async fn processed(dir: &Path) -> AnimationGenerator {
        let path = dir.join("storyboard.md");
        fs::write(&path, STORYBOARD).unwrap();
        let mut generator = AnimationGenerator::new(ActionExtractor::offline());
        generator.process(&path).await.unwrap();
        generator
    }

    #[tokio::test]
    async fn process_names_animations_by_scene() {
        let dir = tempfile::tempdir().unwrap();
        let generator = processed(dir.path()).await;

        let ids: Vec<&String> = generator.animations().keys().collect();
        assert_eq!(ids, ["luna_1", "luna_2", "luna_3", "captain_1"]);
        assert_eq!(generator.animations()["luna_1"].name, "luna_1");
        assert_eq!(generator.animations()["luna_3"].duration, 7.0);
        assert_eq!(generator.scenes()[2].actions.primary_action, "brushing");
    }

    #[tokio::test]
    async fn export_all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = processed(dir.path()).await;
        let out = dir.path().join("out/animations");

        let manifest = generator.export_all(&out, ExportFormat::Lottie).unwrap();
        assert_eq!(manifest.animations.len(), generator.scenes().len());
        for entry in manifest.animations.values() {
            assert!(out.join(&entry.file).exists());
        }
        assert!(manifest.animations["luna_3"].looping);
        assert!(!manifest.animations["luna_1"].looping);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(written["version"], "1.0");
        assert_eq!(written["format"], "lottie");
        assert_eq!(written["animations"]["captain_1"]["file"], "captain_1.json");
        assert_eq!(written["animations"]["captain_1"]["duration"], 10.0);

        let scene: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("luna_1.json")).unwrap()).unwrap();
        assert_eq!(scene["nm"], "luna_1");
        assert_eq!(scene["op"], 150);
    }

    #[tokio::test]
    async fn export_all_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let generator = processed(dir.path()).await;
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("luna_1.json"), "stale").unwrap();

        generator.export_all(&out, ExportFormat::Threejs).unwrap();
        let scene: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("luna_1.json")).unwrap()).unwrap();
        assert_eq!(scene["name"], "luna_1");
    }

    #[tokio::test]
    async fn timeline_places_scenes_per_character() {
        let dir = tempfile::tempdir().unwrap();
        let generator = processed(dir.path()).await;
        let path = dir.path().join("timeline.json");

        let timeline = generator.export_combined_timeline(&path).unwrap();
        let luna = &timeline.characters["luna"];
        let starts: Vec<f64> = luna.scenes.iter().map(|s| s.start_time).collect();
        assert_eq!(starts, [0.0, 5.0, 8.0]);
        assert_eq!(luna.total_duration, 15.0);

        let captain = &timeline.characters["captain"];
        assert_eq!(captain.scenes[0].start_time, 0.0);
        assert_eq!(captain.total_duration, 10.0);
        assert_eq!(timeline.total_duration, 15.0);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let first = &written["characters"]["luna"]["scenes"][0];
        assert_eq!(first["step"], "Intro");
        assert_eq!(first["animation"]["name"], "luna_1");
        assert_eq!(first["actions"]["primary_action"], "wave");
    }

    #[tokio::test]
    async fn missing_storyboard_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = AnimationGenerator::new(ActionExtractor::offline());
        let err = generator
            .process(&dir.path().join("missing.md"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoryboardNotFound(_)));
        assert!(generator.animations().is_empty());
    }
}
