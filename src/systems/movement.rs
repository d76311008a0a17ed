//! Position integration.
//!
//! Applies each entity's velocity to its position, scaled by the frame
//! delta, and clamps the result to the world bounds so nothing walks off
//! the glade.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &RigidBody)>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let bounds = Vec2::new(config.world_width, config.world_height);
    for (mut position, body) in query.iter_mut() {
        let next = position.pos + body.velocity * time.delta;
        position.pos = next.clamp(Vec2::ZERO, bounds);
    }
}
