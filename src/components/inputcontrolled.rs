//! Input-driven movement component.
//!
//! The system in [`crate::systems::input`] reads the shared keyboard and
//! joystick state and updates the velocity and animation track of every
//! entity carrying [`InputControlled`].

use bevy_ecs::prelude::Component;

/// Movement intent for entities driven by the player.
///
/// `speed` is the per-axis magnitude applied while a digital direction is
/// held, and the scale applied to the analog joystick vector.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
