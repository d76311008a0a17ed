//! Per-tick digital input resource.
//!
//! The host polls its input devices, debounces them, and writes the
//! direction states here once per tick; core systems only ever read this
//! resource. There is no key-binding knowledge in the core.

use bevy_ecs::prelude::Resource;

/// Boolean state of one digital action.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action went down this tick.
    pub just_pressed: bool,
    /// Whether the action went up this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Update the held state, deriving the edge flags.
    pub fn set_active(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Resource capturing the per-tick digital input relevant to the scene.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    /// The start gesture that unlocks the scene (button or key).
    pub action_start: BoolState,
}
