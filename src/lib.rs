//! Sporeglade interaction core.
//!
//! The real-time logic of a top-down glade exploration scene: dual-input
//! velocity resolution, proximity detection, dynamic depth sorting,
//! cooldown-gated dialogue triggers, and the spore economy around the
//! resonance encounter. Rendering, audio playback, and device polling
//! belong to the host; this crate exposes the ECS data they consume.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
