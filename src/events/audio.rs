//! Audio commands queued for the host collaborator.
//!
//! The core emits these as fire-and-forget requests; it never consumes a
//! response. What a command means (streaming, mixing, volume) is entirely
//! the host's business.

use bevy_ecs::message::Message;

/// Track id of the scene's looping background music.
pub const MUSIC_ID: &str = "glade_theme";

/// Commands sent to the host audio layer.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    ResumeMusic { id: String },
    StopMusic { id: String },
    PlayFx { id: String },
}
