//! Transient speech bubble entities.
//!
//! Bubbles are spawned by the dialogue system and by the resonance success
//! path, always together with [`DynamicText`](super::dynamictext::DynamicText)
//! and a [`Ttl`](super::ttl::Ttl). Nothing in the core touches a bubble
//! after creation; the renderer draws it, the ttl system removes it.

use bevy_ecs::prelude::Component;

/// Which way the bubble's pointer flags lean, as a hint for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSide {
    Left,
    Right,
    Center,
}

/// Marker data for a transient dialogue or celebration bubble.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpeechBubble {
    pub pointer: PointerSide,
}

impl SpeechBubble {
    /// A bubble with a centered pointer.
    pub fn centered() -> Self {
        Self {
            pointer: PointerSide::Center,
        }
    }

    /// Point the bubble toward `target_x`, given the bubble's own x.
    pub fn toward(bubble_x: f32, target_x: f32) -> Self {
        let pointer = if (target_x - bubble_x).abs() < f32::EPSILON {
            PointerSide::Center
        } else if target_x < bubble_x {
            PointerSide::Left
        } else {
            PointerSide::Right
        };
        Self { pointer }
    }
}
