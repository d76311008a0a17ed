//! Dialogue trigger pass.
//!
//! Each tick, every trigger point within the dialogue radius of the
//! wanderer and past its cooldown fires a speech bubble. Triggers cool down
//! independently; several may fire in the same tick.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::dialoguetrigger::DialogueTrigger;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::proximity::within;
use crate::components::speechbubble::SpeechBubble;
use crate::components::tint::{Rgba, Tint};
use crate::components::ttl::Ttl;
use crate::components::wanderer::Wanderer;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// How far above its trigger a bubble floats.
const BUBBLE_RISE: f32 = 30.0;
/// Bubbles draw over the scene, under nothing but other UI.
pub const BUBBLE_ZINDEX: i32 = 7;
const BUBBLE_FONT_SIZE: f32 = 12.0;
const BUBBLE_FILL: Rgba = Rgba::new(0, 0, 0, 204);

pub fn dialogue_triggers(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    wanderer: Query<&MapPosition, With<Wanderer>>,
    mut triggers: Query<(&MapPosition, &mut DialogueTrigger)>,
) {
    let Ok(wanderer_pos) = wanderer.single() else {
        return;
    };
    let now = time.elapsed;
    let center_x = config.world_width * 0.5;

    for (trigger_pos, mut trigger) in triggers.iter_mut() {
        if !within(wanderer_pos.pos, trigger_pos.pos, config.dialogue_radius) {
            continue;
        }
        if !trigger.ready(now, config.dialogue_cooldown) {
            continue;
        }
        trigger.last_fired = Some(now);

        // The bubble sits halfway between the trigger and the screen-center
        // column, a little above the trigger point.
        let bubble_x = (trigger_pos.pos.x + center_x) * 0.5;
        let bubble_y = trigger_pos.pos.y - BUBBLE_RISE;

        debug!(
            "Dialogue fired at ({}, {}): {:?}",
            trigger_pos.pos.x, trigger_pos.pos.y, trigger.text
        );

        commands.spawn((
            Group::new("bubbles"),
            MapPosition::new(bubble_x, bubble_y),
            ZIndex(BUBBLE_ZINDEX),
            SpeechBubble::toward(bubble_x, trigger_pos.pos.x),
            Tint { color: BUBBLE_FILL },
            DynamicText::new(
                trigger.text.clone(),
                "monospace",
                BUBBLE_FONT_SIZE,
                Rgba::WHITE,
            ),
            Ttl::new(config.bubble_duration),
        ));
    }
}
