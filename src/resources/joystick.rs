//! Virtual joystick state.
//!
//! Raw pointer drags arrive as
//! [`PointerDragEvent`](crate::events::input::PointerDragEvent) messages and
//! are folded into these resources once per tick. [`JoystickState`] is the
//! normalized output consumed by the input resolver; [`VirtualJoystick`]
//! tracks the base point and the knob for the host to draw.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Normalized analog stick output. `(dx, dy)` always lies in the unit disk.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct JoystickState {
    pub active: bool,
    pub dx: f32,
    pub dy: f32,
}

impl JoystickState {
    /// Per-axis dead-zone test; either axis past the threshold counts.
    pub fn exceeds_dead_zone(&self, dead_zone: f32) -> bool {
        self.dx.abs() > dead_zone || self.dy.abs() > dead_zone
    }
}

/// Geometry of the on-screen stick.
#[derive(Resource, Clone, Copy, Debug)]
pub struct VirtualJoystick {
    pub base: Vec2,
    pub radius: f32,
    pub knob: Vec2,
}

impl VirtualJoystick {
    /// Create a stick with the knob resting on the base point. `radius`
    /// must be positive.
    pub fn new(base: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            base,
            radius,
            knob: base,
        }
    }

    /// Move the knob toward a raw drag point and return the normalized
    /// offset. Points inside the radius are followed exactly; points
    /// outside are projected back onto the circle along the same angle.
    pub fn drag_to(&mut self, point: Vec2) -> (f32, f32) {
        let delta = point - self.base;
        if delta.length() <= self.radius {
            self.knob = point;
        } else {
            let angle = delta.y.atan2(delta.x);
            self.knob = self.base + Vec2::new(angle.cos(), angle.sin()) * self.radius;
        }
        let offset = (self.knob - self.base) / self.radius;
        (offset.x, offset.y)
    }

    /// Snap the knob back to the base.
    pub fn reset(&mut self) {
        self.knob = self.base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_knob_follows_inside_radius() {
        let mut stick = VirtualJoystick::new(Vec2::new(100.0, 620.0), 50.0);
        let (dx, dy) = stick.drag_to(Vec2::new(130.0, 620.0));
        assert_eq!(stick.knob, Vec2::new(130.0, 620.0));
        assert!((dx - 0.6).abs() < EPSILON);
        assert!(dy.abs() < EPSILON);
    }

    #[test]
    fn test_knob_clamps_outside_radius() {
        let mut stick = VirtualJoystick::new(Vec2::new(100.0, 620.0), 50.0);
        let (dx, dy) = stick.drag_to(Vec2::new(300.0, 620.0));
        assert!((dx - 1.0).abs() < EPSILON);
        assert!(dy.abs() < EPSILON);
        assert!((stick.knob - stick.base).length() <= 50.0 + EPSILON);
    }

    #[test]
    fn test_normalized_output_stays_in_unit_disk() {
        let mut stick = VirtualJoystick::new(Vec2::new(100.0, 620.0), 50.0);
        let points = [
            Vec2::new(100.0, 620.0),
            Vec2::new(175.0, 545.0),
            Vec2::new(-400.0, 900.0),
            Vec2::new(101.0, 621.0),
            Vec2::new(1000.0, 1000.0),
        ];
        for point in points {
            let (dx, dy) = stick.drag_to(point);
            assert!(dx * dx + dy * dy <= 1.0 + EPSILON, "({dx}, {dy}) left the unit disk");
        }
    }

    #[test]
    fn test_diagonal_clamp_keeps_angle() {
        let mut stick = VirtualJoystick::new(Vec2::ZERO, 50.0);
        let (dx, dy) = stick.drag_to(Vec2::new(300.0, 300.0));
        assert!((dx - dy).abs() < EPSILON);
        assert!((dx * dx + dy * dy - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_reset_returns_knob_to_base() {
        let mut stick = VirtualJoystick::new(Vec2::new(100.0, 620.0), 50.0);
        stick.drag_to(Vec2::new(300.0, 700.0));
        stick.reset();
        assert_eq!(stick.knob, stick.base);
    }
}
