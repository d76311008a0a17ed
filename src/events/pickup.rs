//! Spore pickup events and the collecting observer.
//!
//! The pickup system emits [`SporeCollectedEvent`] for every spore found in
//! range of the wanderer; the observer removes the spore and credits the
//! economy. Keeping the mutation in an observer means the proximity pass
//! itself never writes anything.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::sporecount::SporeCount;

/// Fired when the wanderer's pickup pass finds a spore inside its radius.
#[derive(Event, Debug, Clone, Copy)]
pub struct SporeCollectedEvent {
    pub spore: Entity,
}

/// Observer that despawns the collected spore and increments the count.
///
/// The despawn is applied before the next proximity pass runs, so a
/// collected spore can never be tested again.
pub fn observe_spore_collected(
    trigger: On<SporeCollectedEvent>,
    mut commands: Commands,
    mut spores: ResMut<SporeCount>,
) {
    let spore = trigger.event().spore;
    spores.collect();
    commands.entity(spore).try_despawn();
    debug!("Spore {:?} collected, count now {}", spore, spores.get());
}
