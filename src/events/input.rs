//! Pointer drag messages feeding the virtual joystick.
//!
//! The host routes its pointer events here already classified into a drag
//! lifecycle; the joystick system drains the mailbox once per tick.

use bevy_ecs::message::Message;

/// One step of a pointer drag, in screen coordinates.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PointerDragEvent {
    Start,
    Move { x: f32, y: f32 },
    End,
}
