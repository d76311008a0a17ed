//! Virtual joystick drag handling.
//!
//! Drains the [`PointerDragEvent`] mailbox once per tick and folds the drag
//! lifecycle into [`VirtualJoystick`] geometry and normalized
//! [`JoystickState`] output.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::events::audio::{AudioCmd, MUSIC_ID};
use crate::events::input::PointerDragEvent;
use crate::resources::joystick::{JoystickState, VirtualJoystick};

/// Apply queued pointer drags to the joystick.
///
/// Drag start marks the stick active; the first touch doubles as the user
/// gesture that lets background music resume, so a resume request is
/// queued. Drag end zeroes the output and snaps the knob back to the base.
pub fn virtual_joystick(
    mut reader: MessageReader<PointerDragEvent>,
    mut stick: ResMut<VirtualJoystick>,
    mut state: ResMut<JoystickState>,
    mut audio: MessageWriter<AudioCmd>,
) {
    for event in reader.read() {
        match *event {
            PointerDragEvent::Start => {
                state.active = true;
                audio.write(AudioCmd::ResumeMusic {
                    id: MUSIC_ID.into(),
                });
            }
            PointerDragEvent::Move { x, y } => {
                let (dx, dy) = stick.drag_to(Vec2::new(x, y));
                state.dx = dx;
                state.dy = dy;
            }
            PointerDragEvent::End => {
                state.active = false;
                state.dx = 0.0;
                state.dy = 0.0;
                stick.reset();
            }
        }
    }
}

/// Advance the drag mailbox so same-tick writes become readable.
pub fn update_pointer_drag_messages(mut msgs: ResMut<Messages<PointerDragEvent>>) {
    msgs.update();
}
