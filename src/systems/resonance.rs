//! The resonance encounter state machine.
//!
//! The wanderer can trade a spore for a tuning attempt while overlapping
//! the amanita. Phases:
//!
//! - `Idle` → `AwaitingInput`: overlap with spores in hand. The cost is
//!   paid up front and is not refunded on failure. A [`TuningPrompt`] goes
//!   out over the bridge and the system suspends; the tick loop never
//!   blocks on the player.
//! - `AwaitingInput` → `Consumed`: the reply parses to the configured
//!   target. The reward is credited, a celebration bubble appears, and the
//!   amanita is despawned for good.
//! - `AwaitingInput` → `Idle`: any other reply, including non-numeric
//!   input. The camera flashes magenta and the amanita stays available.
//!
//! Overlapping with zero spores does nothing, silently, every tick.

use bevy_ecs::prelude::*;
use crossbeam_channel::TryRecvError;
use log::{debug, info, warn};

use crate::components::amanita::Amanita;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::proximity::{ProximityZone, within};
use crate::components::speechbubble::SpeechBubble;
use crate::components::tint::{Rgba, Tint};
use crate::components::ttl::Ttl;
use crate::components::wanderer::Wanderer;
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::CameraFx;
use crate::resources::gameconfig::GameConfig;
use crate::resources::resonance::{
    ResonancePhase, ResonanceState, TuningBridge, TuningPrompt, TuningReply,
};
use crate::resources::sporecount::SporeCount;

const CELEBRATION_TEXT: &str = "Gaze beyond the veil....";
const CELEBRATION_FONT_SIZE: f32 = 20.0;
const CELEBRATION_FILL: Rgba = Rgba::new(0, 0, 0, 204);
const FLASH_TINT: Rgba = Rgba::MAGENTA;

pub fn resonance_encounter(
    mut commands: Commands,
    mut state: ResMut<ResonanceState>,
    mut spores: ResMut<SporeCount>,
    mut camera_fx: ResMut<CameraFx>,
    bridge: Option<Res<TuningBridge>>,
    config: Res<GameConfig>,
    wanderer: Query<&MapPosition, With<Wanderer>>,
    amanita: Query<(Entity, &MapPosition, &ProximityZone), With<Amanita>>,
) {
    match state.phase {
        ResonancePhase::Consumed => {
            // Terminal. The amanita is already gone; nothing to test.
        }
        ResonancePhase::Idle => {
            let Ok(wanderer_pos) = wanderer.single() else {
                return;
            };
            let Ok((_, amanita_pos, zone)) = amanita.single() else {
                return;
            };
            if !within(wanderer_pos.pos, amanita_pos.pos, zone.radius) {
                return;
            }
            let Some(bridge) = bridge else {
                warn!("Tuning bridge missing; resonance encounter skipped");
                return;
            };
            if !spores.try_spend(config.resonance_cost) {
                // Not enough spores: the wanderer can sit in the overlap
                // forever and nothing happens.
                return;
            }
            let prompt = TuningPrompt {
                min: config.resonance_prompt_min,
                max: config.resonance_prompt_max,
            };
            if bridge.tx_prompt.send(prompt).is_err() {
                // The host prompt UI went away mid-session; undo the
                // payment and leave the encounter available.
                spores.reward(config.resonance_cost);
                warn!("Tuning prompt channel closed; resonance encounter skipped");
                return;
            }
            debug!(
                "Resonance started, prompting for a value in {}..={}",
                prompt.min, prompt.max
            );
            state.phase = ResonancePhase::AwaitingInput;
        }
        ResonancePhase::AwaitingInput => {
            let Some(bridge) = bridge else {
                return;
            };
            let reply = match bridge.rx_reply.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("Tuning reply channel closed; treating as failed tuning");
                    TuningReply::new("")
                }
            };

            let tuned = reply
                .raw
                .trim()
                .parse::<i64>()
                .map(|value| value == config.resonance_target)
                .unwrap_or(false);

            if tuned {
                spores.reward(config.resonance_reward);
                if let Ok((entity, _, _)) = amanita.single() {
                    commands.entity(entity).try_despawn();
                }
                commands.spawn((
                    Group::new("bubbles"),
                    MapPosition::new(config.world_width * 0.5, config.world_height * 0.5),
                    ZIndex(crate::systems::dialogue::BUBBLE_ZINDEX),
                    SpeechBubble::centered(),
                    Tint {
                        color: CELEBRATION_FILL,
                    },
                    DynamicText::new(
                        CELEBRATION_TEXT,
                        "monospace",
                        CELEBRATION_FONT_SIZE,
                        Rgba::WHITE,
                    ),
                    Ttl::new(config.bubble_duration),
                ));
                info!("Resonance succeeded; spores now {}", spores.get());
                state.phase = ResonancePhase::Consumed;
            } else {
                debug!("Resonance failed on reply {:?}", reply.raw);
                camera_fx.pulse(FLASH_TINT, config.resonance_flash_duration);
                state.phase = ResonancePhase::Idle;
            }
        }
    }
}
