//! Bridge toward the host audio collaborator.
//!
//! The core never touches an audio device. Systems queue
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages; the forwarding
//! system pushes them over this channel and the host decides what a command
//! means. Use [`setup_audio_bridge`] once during initialization; the
//! returned receiver is the host's end.

use crate::events::audio::AudioCmd;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Outbound channel carrying audio commands to the host.
#[derive(Resource)]
pub struct AudioBridge {
    pub tx_cmd: Sender<AudioCmd>,
}

/// Create the command channel, insert the [`AudioBridge`] resource and the
/// `Messages<AudioCmd>` mailbox, and return the host's receiving end.
pub fn setup_audio_bridge(world: &mut World) -> Receiver<AudioCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBridge { tx_cmd });
    world.insert_resource(Messages::<AudioCmd>::default());
    rx_cmd
}
