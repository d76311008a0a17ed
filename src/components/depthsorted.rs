use bevy_ecs::prelude::Component;

/// Marker for entities whose [`ZIndex`](super::zindex::ZIndex) is recomputed
/// from their y coordinate by the depth system every tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DepthSorted;
