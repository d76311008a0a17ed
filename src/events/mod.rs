//! Event and message types exchanged across systems.
//!
//! Messages (`bevy_ecs` mailboxes drained once per tick) carry input and
//! audio traffic; observed events carry one-shot gameplay notifications.
//!
//! Submodules:
//! - [`audio`] – commands queued for the host audio collaborator
//! - [`gamestate`] – state transition notifications and the apply observer
//! - [`input`] – pointer drag messages feeding the virtual joystick
//! - [`pickup`] – spore pickup notifications and the collecting observer

pub mod audio;
pub mod gamestate;
pub mod input;
pub mod pickup;
