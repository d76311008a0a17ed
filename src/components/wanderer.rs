use bevy_ecs::prelude::Component;

/// Marker for the player-controlled actor. Exactly one per scene.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Wanderer;
