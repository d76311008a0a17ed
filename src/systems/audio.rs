//! Audio command forwarding.
//!
//! Systems queue [`AudioCmd`](crate::events::audio::AudioCmd) messages; this
//! module pushes them over the
//! [`AudioBridge`](crate::resources::audio::AudioBridge) toward the host.
//! The bridge is optional: a host without audio simply never inserts it and
//! the commands are dropped with a warning, per the soft-failure rule.

use bevy_ecs::prelude::*;
use log::warn;

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Forward queued audio commands to the host.
pub fn forward_audio_cmds(
    bridge: Option<Res<AudioBridge>>,
    mut reader: MessageReader<AudioCmd>,
) {
    let Some(bridge) = bridge else {
        let dropped = reader.read().count();
        if dropped > 0 {
            warn!("Audio bridge missing; dropped {} audio command(s)", dropped);
        }
        return;
    };
    for cmd in reader.read() {
        // Ignore send errors on shutdown; the host hung up first.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the AudioCmd mailbox so same-tick writes become readable.
pub fn update_audio_cmd_messages(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}
