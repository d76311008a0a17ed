//! Movement input resolution.
//!
//! Merges the digital keyboard state and the analog joystick into a velocity
//! and an animation track once per tick, for every entity carrying
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled).

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::{AnimTrack, Animation};
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::joystick::JoystickState;

/// Resolve keyboard + joystick into a velocity and an animation track.
///
/// The keyboard writes first; an active joystick then overwrites both axes.
/// Last write wins: a held key is silently ignored while dragging, though
/// its direction flag still feeds animation selection. Track priority:
/// right > left > up > plain walk.
pub fn resolve_movement_input(
    mut query: Query<(&InputControlled, &mut RigidBody, &mut Animation)>,
    input: Res<InputState>,
    joystick: Res<JoystickState>,
    config: Res<GameConfig>,
) {
    for (controlled, mut body, mut animation) in query.iter_mut() {
        let speed = controlled.speed;
        let mut velocity = Vec2::ZERO;
        let mut moving = false;
        let mut moving_left = false;
        let mut moving_right = false;
        let mut moving_up = false;

        if input.direction_left.active {
            velocity.x = -speed;
            moving = true;
            moving_left = true;
        }
        if input.direction_right.active {
            velocity.x = speed;
            moving = true;
            moving_right = true;
        }
        if input.direction_up.active {
            velocity.y = -speed;
            moving = true;
            moving_up = true;
        }
        if input.direction_down.active {
            velocity.y = speed;
            moving = true;
        }

        if joystick.active {
            velocity.x = joystick.dx * speed;
            velocity.y = joystick.dy * speed;

            if joystick.exceeds_dead_zone(config.joystick_dead_zone) {
                moving = true;
                if joystick.dx.abs() > joystick.dy.abs() {
                    if joystick.dx > 0.0 {
                        moving_right = true;
                    } else {
                        moving_left = true;
                    }
                } else if joystick.dy < 0.0 {
                    moving_up = true;
                }
                // A dominant downward axis falls through to the default
                // walk track; there is no dedicated "down" animation.
            }
        }

        body.velocity = velocity;

        animation.track = if moving {
            if moving_right {
                AnimTrack::WalkRight
            } else if moving_left {
                AnimTrack::WalkLeft
            } else if moving_up {
                AnimTrack::WalkUp
            } else {
                AnimTrack::Walk
            }
        } else {
            AnimTrack::Idle
        };
    }
}
