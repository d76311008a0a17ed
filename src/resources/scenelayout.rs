//! Scene layout data.
//!
//! The handful of authored positions in the glade (wanderer spawn, the
//! amanita, the dialogue trigger points) live in `assets/scene.json`. A
//! missing or malformed file falls back to the built-in default layout,
//! with a logged warning.

use bevy_ecs::prelude::Resource;
use log::warn;
use serde::Deserialize;
use std::path::Path;

/// A named position in the layout file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

/// One dialogue trigger point and its line.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerDef {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Authored scene positions, loaded at setup.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct SceneLayout {
    pub wanderer: PointDef,
    pub amanita: PointDef,
    pub amanita_vibe: i32,
    pub dialogue_triggers: Vec<TriggerDef>,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            wanderer: PointDef { x: 400.0, y: 360.0 },
            amanita: PointDef { x: 400.0, y: 186.0 },
            amanita_vibe: 5,
            dialogue_triggers: vec![
                TriggerDef {
                    x: 195.0,
                    y: 346.0,
                    text: "Do you feel it?".into(),
                },
                TriggerDef {
                    x: 752.0,
                    y: 478.0,
                    text: "We've been looking for you.".into(),
                },
                TriggerDef {
                    x: 79.0,
                    y: 245.0,
                    text: "Welcome home.".into(),
                },
            ],
        }
    }
}

impl SceneLayout {
    /// Load from a JSON file, falling back to the built-in layout on any
    /// error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Failed to read scene layout {:?}: {}; using built-in layout",
                    path, e
                );
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(layout) => layout,
            Err(e) => {
                warn!(
                    "Failed to parse scene layout {:?}: {}; using built-in layout",
                    path, e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = SceneLayout::default();
        assert_eq!(layout.dialogue_triggers.len(), 3);
        assert_eq!(layout.amanita_vibe, 5);
        assert_eq!(layout.wanderer.x, 400.0);
        assert_eq!(layout.dialogue_triggers[2].text, "Welcome home.");
    }

    #[test]
    fn test_parse_from_json() {
        let json = r#"{
            "wanderer": { "x": 10.0, "y": 20.0 },
            "amanita": { "x": 30.0, "y": 40.0 },
            "amanita_vibe": 7,
            "dialogue_triggers": [
                { "x": 1.0, "y": 2.0, "text": "hello" }
            ]
        }"#;
        let layout: SceneLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.wanderer.y, 20.0);
        assert_eq!(layout.amanita_vibe, 7);
        assert_eq!(layout.dialogue_triggers[0].text, "hello");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let layout = SceneLayout::load_or_default("./no/such/file.json");
        assert_eq!(layout.dialogue_triggers.len(), 3);
    }
}
