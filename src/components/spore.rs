use bevy_ecs::prelude::Component;

/// Marker for a collectible spore. Despawned on pickup; re-firing the
/// pickup test is impossible once the despawn has been applied.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Spore;
