//! Camera feedback effects requested by game logic.

use bevy_ecs::prelude::Resource;

use crate::components::tint::Rgba;

/// Pending camera tint pulse.
///
/// The host renderer applies `tint` while it is `Some`; the camera-fx
/// system counts `remaining` down and clears it. A new pulse simply
/// overwrites the previous one.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CameraFx {
    pub tint: Option<Rgba>,
    pub remaining: f32,
}

impl CameraFx {
    /// Start a tint pulse for `duration` seconds.
    pub fn pulse(&mut self, tint: Rgba, duration: f32) {
        self.tint = Some(tint);
        self.remaining = duration;
    }

    pub fn clear(&mut self) {
        self.tint = None;
        self.remaining = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.tint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_then_clear() {
        let mut fx = CameraFx::default();
        assert!(!fx.is_active());
        fx.pulse(Rgba::MAGENTA, 0.5);
        assert!(fx.is_active());
        assert_eq!(fx.tint, Some(Rgba::MAGENTA));
        fx.clear();
        assert!(!fx.is_active());
        assert_eq!(fx.remaining, 0.0);
    }
}
