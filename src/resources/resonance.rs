//! Resonance encounter state and the tuning-prompt bridge.
//!
//! The encounter needs a single integer "tuning value" from the player.
//! Rather than block the tick on a modal prompt, the encounter suspends in
//! [`ResonancePhase::AwaitingInput`] and polls a channel, so the rest of
//! the tick loop keeps running while the host collects the answer.

use bevy_ecs::prelude::{Resource, World};
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Where the encounter currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResonancePhase {
    /// No exchange in progress; overlap plus spores can start one.
    #[default]
    Idle,
    /// Payment taken, prompt sent, waiting for the host's reply.
    AwaitingInput,
    /// Success outcome reached; the encounter is gone for this session.
    Consumed,
}

/// Current phase of the resonance encounter.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ResonanceState {
    pub phase: ResonancePhase,
}

/// Prompt sent to the host UI when an exchange starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningPrompt {
    pub min: i64,
    pub max: i64,
}

/// Raw reply typed by the player. Anything that does not parse to the
/// configured target integer counts as a failed tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningReply {
    pub raw: String,
}

impl TuningReply {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Channel pair linking the encounter system with the host's prompt UI.
#[derive(Resource)]
pub struct TuningBridge {
    /// Sender for prompts (ECS -> host).
    pub tx_prompt: Sender<TuningPrompt>,
    /// Receiver for replies (host -> ECS).
    pub rx_reply: Receiver<TuningReply>,
}

/// Create the bridge, insert the resonance resources, and hand the host its
/// two channel ends: where prompts arrive and where replies go.
pub fn setup_tuning_bridge(world: &mut World) -> (Receiver<TuningPrompt>, Sender<TuningReply>) {
    let (tx_prompt, rx_prompt) = unbounded::<TuningPrompt>();
    let (tx_reply, rx_reply) = unbounded::<TuningReply>();

    world.insert_resource(TuningBridge { tx_prompt, rx_reply });
    world.insert_resource(ResonanceState::default());

    (rx_prompt, tx_reply)
}
