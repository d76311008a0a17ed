//! The encounter mushroom.

use bevy_ecs::prelude::Component;

/// The one-per-scene amanita that hosts the resonance encounter.
///
/// `vibe` is a cosmetic attribute carried over from the scene data; the
/// encounter logic stores it but never reads it.
#[derive(Component, Clone, Copy, Debug)]
pub struct Amanita {
    pub vibe: i32,
}

impl Amanita {
    pub fn new(vibe: i32) -> Self {
        Self { vibe }
    }
}
