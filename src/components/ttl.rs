//! Time-to-live component for transient entities.
//!
//! Speech bubbles and the celebration message are spawned with a `Ttl` and
//! removed by the ttl system when it runs out. Fire and forget: there is no
//! callback and no cancellation path.

use bevy_ecs::prelude::Component;

/// Remaining display time in seconds before the entity despawns.
///
/// The countdown uses the scaled delta from
/// [`WorldTime`](crate::resources::worldtime::WorldTime).
#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
