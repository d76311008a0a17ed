//! Animation track selection handed to the renderer.
//!
//! The interaction core does not advance frames; it only decides which named
//! track an entity should be playing. The host renderer maps track keys to
//! the animations it registered at load time.

use bevy_ecs::prelude::Component;

/// Named animation tracks of the wanderer sprite set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimTrack {
    #[default]
    Idle,
    Walk,
    WalkLeft,
    WalkRight,
    WalkUp,
}

impl AnimTrack {
    /// Key understood by the host renderer's animation registry.
    pub fn key(self) -> &'static str {
        match self {
            AnimTrack::Idle => "idle",
            AnimTrack::Walk => "walk",
            AnimTrack::WalkLeft => "walk_left",
            AnimTrack::WalkRight => "walk_right",
            AnimTrack::WalkUp => "walk_up",
        }
    }
}

/// Current animation track of an entity, rewritten by the input resolver.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Animation {
    pub track: AnimTrack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_track_is_idle() {
        assert_eq!(Animation::default().track, AnimTrack::Idle);
    }

    #[test]
    fn test_track_keys() {
        assert_eq!(AnimTrack::Idle.key(), "idle");
        assert_eq!(AnimTrack::Walk.key(), "walk");
        assert_eq!(AnimTrack::WalkLeft.key(), "walk_left");
        assert_eq!(AnimTrack::WalkRight.key(), "walk_right");
        assert_eq!(AnimTrack::WalkUp.key(), "walk_up");
    }
}
