//! Camera tint pulse countdown.
//!
//! The resonance failure path starts a pulse on
//! [`CameraFx`](crate::resources::camerafx::CameraFx); this system counts
//! it down and clears it when the duration has passed. The host reads the
//! tint every frame while it lasts.

use bevy_ecs::prelude::*;

use crate::resources::camerafx::CameraFx;
use crate::resources::worldtime::WorldTime;

pub fn camera_fx(mut fx: ResMut<CameraFx>, time: Res<WorldTime>) {
    if !fx.is_active() {
        return;
    }
    fx.remaining -= time.delta;
    if fx.remaining <= 0.0 {
        fx.clear();
    }
}
