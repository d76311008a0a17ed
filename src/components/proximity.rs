//! Circular proximity zones and the overlap test.
//!
//! Everything interactive in the glade (spores, the amanita, dialogue
//! triggers) is a point with a radius; detection is a strict circular
//! distance test evaluated every tick. There is no hysteresis: re-firing is
//! prevented by despawn, cooldown, or resource gating, never by the test
//! itself.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Interaction radius around a point entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ProximityZone {
    pub radius: f32,
}

impl ProximityZone {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Strict circular overlap: true iff the Euclidean distance between `a` and
/// `b` is less than `threshold`. A distance exactly at the threshold counts
/// as outside.
pub fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_inside() {
        assert!(within(Vec2::new(400.0, 360.0), Vec2::new(410.0, 365.0), 30.0));
    }

    #[test]
    fn test_within_outside() {
        assert!(!within(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 30.0));
    }

    #[test]
    fn test_within_boundary_is_outside() {
        // Exactly threshold apart: strict inequality, not inclusive.
        assert!(!within(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), 30.0));
    }

    #[test]
    fn test_within_just_under_boundary() {
        assert!(within(Vec2::new(0.0, 0.0), Vec2::new(29.999, 0.0), 30.0));
    }

    #[test]
    fn test_within_zero_threshold_never_matches() {
        assert!(!within(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 0.0));
    }
}
