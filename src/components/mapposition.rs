use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn distance_to(&self, other: &MapPosition) -> f32 {
        self.pos.distance(other.pos)
    }
}
