//! Persistent entity marker component.
//!
//! Entities carrying [`Persistent`] survive scene teardown. Observers and
//! registered hook systems are spawned with it so that
//! [`clean_all_entities`](crate::game::clean_all_entities) leaves them alone.

use bevy_ecs::prelude::Component;

/// Marker for entities that must not be despawned with the scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct Persistent;
