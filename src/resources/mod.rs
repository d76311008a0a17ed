//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read or written during the
//! tick: configuration, input state, timing, the spore economy, and the
//! bridges toward host collaborators.
//!
//! Overview
//! - `audio` – outbound channel toward the host audio collaborator
//! - `camerafx` – pending camera tint pulse
//! - `gameconfig` – tunable constants loaded from `config.ini`
//! - `gamestate` – authoritative and pending high-level scene state
//! - `input` – per-tick digital direction states delivered by the host
//! - `joystick` – virtual joystick geometry and normalized output
//! - `resonance` – encounter phase and the tuning-prompt bridge
//! - `scenelayout` – authored positions loaded from `assets/scene.json`
//! - `sporecount` – the spore economy counter
//! - `systemsstore` – registry of hook systems addressable by name
//! - `worldsignals` – global key/value signals for cross-system data
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod camerafx;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod joystick;
pub mod resonance;
pub mod scenelayout;
pub mod sporecount;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
