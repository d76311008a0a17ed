//! Color values handed to the renderer.
//!
//! The core never blends or gamma-corrects; it only carries color data for
//! the host. [`Rgba`] is used by text, bubble fills, and the camera pulse in
//! [`CameraFx`](crate::resources::camerafx::CameraFx); [`Tint`] modulates a
//! single entity's rendering.

use bevy_ecs::prelude::Component;

/// Plain RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const MAGENTA: Rgba = Rgba::new(255, 0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply with another color, component-wise.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn multiply(self, other: Rgba) -> Rgba {
        Rgba::new(
            ((self.r as u16 * other.r as u16) / 255) as u8,
            ((self.g as u16 * other.g as u16) / 255) as u8,
            ((self.b as u16 * other.b as u16) / 255) as u8,
            ((self.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

/// Color modulation for an entity's rendering. Bubbles use it for their
/// translucent fill.
#[derive(Component, Clone, Copy, Debug)]
pub struct Tint {
    pub color: Rgba,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Rgba::new(r, g, b, a),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Tint::default().color, Rgba::WHITE);
    }

    #[test]
    fn test_multiply_with_white_is_identity() {
        let c = Rgba::new(100, 150, 200, 255);
        assert_eq!(c.multiply(Rgba::WHITE), c);
    }

    #[test]
    fn test_multiply_with_black_zeroes_out() {
        let c = Rgba::new(100, 150, 200, 255);
        assert_eq!(c.multiply(Rgba::new(0, 0, 0, 0)), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_multiply_partial_values() {
        let result = Rgba::WHITE.multiply(Rgba::new(128, 64, 32, 255));
        assert_eq!(result, Rgba::new(128, 64, 32, 255));
    }
}
