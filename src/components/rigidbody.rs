//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity that the movement system
//! integrates into [`MapPosition`](super::mapposition::MapPosition) each
//! tick. The interaction core only needs straight axis-aligned velocities,
//! so there is no friction or force accumulation here.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second, written by the input resolver and
/// consumed by the movement system.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Zero the velocity.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_set_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(100.0, -50.0));
        assert_eq!(rb.velocity, Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_stop() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(10.0, 10.0));
        rb.stop();
        assert_eq!(rb.velocity, Vec2::ZERO);
    }
}
