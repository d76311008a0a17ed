//! Spore pickup pass.
//!
//! Tests the wanderer against every live spore each tick and emits a
//! [`SporeCollectedEvent`] per hit. The observer in
//! [`crate::events::pickup`] despawns the spore and credits the count
//! before the next pass, so a spore can fire at most once.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::proximity::{ProximityZone, within};
use crate::components::spore::Spore;
use crate::components::wanderer::Wanderer;
use crate::events::pickup::SporeCollectedEvent;

pub fn spore_pickup(
    mut commands: Commands,
    wanderer: Query<&MapPosition, With<Wanderer>>,
    spores: Query<(Entity, &MapPosition, &ProximityZone), With<Spore>>,
) {
    let Ok(wanderer_pos) = wanderer.single() else {
        return;
    };
    for (entity, position, zone) in spores.iter() {
        if within(wanderer_pos.pos, position.pos, zone.radius) {
            commands.trigger(SporeCollectedEvent { spore: entity });
        }
    }
}
