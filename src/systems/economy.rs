//! Spore count publication.
//!
//! [`SporeCount`](crate::resources::sporecount::SporeCount) is the
//! authoritative counter; this system mirrors it into
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals) whenever
//! it changes so bound HUD texts pick it up.

use bevy_ecs::prelude::*;

use crate::resources::sporecount::SporeCount;
use crate::resources::worldsignals::WorldSignals;

pub fn publish_spore_count(spores: Res<SporeCount>, mut signals: ResMut<WorldSignals>) {
    if spores.is_changed() {
        signals.set_integer("spores", spores.get() as i32);
    }
}
