pub mod body;
pub mod engine;
pub mod export;
pub mod templates;

use serde::Serialize;

pub use engine::AnimationEngine;
pub use export::ExportFormat;

pub const DEFAULT_EASING: &str = "easeInOut";

/// A keyframe value: a number, or a named state such as a mouth shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Label(String),
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Label(value.to_string())
    }
}

/// Values pinned at a normalized time in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub time: f64,
    /// Property name to value, in authoring order.
    pub properties: Vec<(String, PropertyValue)>,
    pub easing: String,
}

impl Keyframe {
    pub fn new<I, K, V>(time: f64, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        Self {
            time,
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            easing: DEFAULT_EASING.to_string(),
        }
    }

    pub fn first_value(&self) -> Option<&PropertyValue> {
        self.properties.first().map(|(_, v)| v)
    }
}

/// The values of one property on one body part over time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTrack {
    pub target: String,
    pub property: String,
    pub keyframes: Vec<Keyframe>,
}

impl AnimationTrack {
    pub fn new(target: &str, property: &str, keyframes: Vec<Keyframe>) -> Self {
        Self {
            target: target.to_string(),
            property: property.to_string(),
            keyframes,
        }
    }

    /// A track whose keyframes carry a single value named after the property.
    pub fn scalar(target: &str, property: &str, points: &[(f64, f64)]) -> Self {
        Self::keyed(target, property, property, points)
    }

    /// Like [`AnimationTrack::scalar`] with a value name that differs from the property.
    pub fn keyed(target: &str, property: &str, key: &str, points: &[(f64, f64)]) -> Self {
        let keyframes = points
            .iter()
            .map(|&(time, value)| Keyframe::new(time, [(key, value)]))
            .collect();
        Self::new(target, property, keyframes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Sound,
    Particle,
}

/// A sound or particle trigger at a normalized time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationEvent {
    pub time: f64,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub id: String,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

impl AnimationEvent {
    pub fn sound(time: f64, id: &str) -> Self {
        Self {
            time,
            kind: EventKind::Sound,
            id: id.to_string(),
            looping: None,
        }
    }

    pub fn particle(time: f64, id: &str) -> Self {
        Self {
            time,
            kind: EventKind::Particle,
            id: id.to_string(),
            looping: None,
        }
    }

    pub fn looping(mut self) -> Self {
        self.looping = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: String,
    /// Seconds.
    pub duration: f64,
    pub tracks: Vec<AnimationTrack>,
    pub looping: bool,
    pub events: Vec<AnimationEvent>,
}

impl Animation {
    pub fn new(name: &str, duration: f64) -> Self {
        Self {
            name: name.to_string(),
            duration,
            tracks: Vec::new(),
            looping: false,
            events: Vec::new(),
        }
    }

    pub fn looped(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn track(mut self, track: AnimationTrack) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn event(mut self, event: AnimationEvent) -> Self {
        self.events.push(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_track_names_values_after_property() {
        let track = AnimationTrack::scalar("head", "rotation", &[(0.0, 0.0), (1.0, 10.0)]);
        assert_eq!(track.keyframes.len(), 2);
        assert_eq!(track.keyframes[1].properties[0].0, "rotation");
        assert_eq!(track.keyframes[1].easing, DEFAULT_EASING);
    }

    #[test]
    fn first_value_follows_authoring_order() {
        let kf = Keyframe::new(
            0.5,
            [
                ("open", PropertyValue::from(0.8)),
                ("shape", PropertyValue::from("o")),
            ],
        );
        assert_eq!(kf.first_value(), Some(&PropertyValue::Number(0.8)));
    }

    #[test]
    fn event_serializes_loop_only_when_set() {
        let plain = serde_json::to_value(AnimationEvent::sound(0.5, "gulp")).unwrap();
        assert_eq!(plain, serde_json::json!({"time": 0.5, "type": "sound", "id": "gulp"}));

        let looped = serde_json::to_value(AnimationEvent::sound(0.0, "brush_loop").looping())
            .unwrap();
        assert_eq!(looped["loop"], true);
    }
}
