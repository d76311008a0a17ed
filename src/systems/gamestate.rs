use crate::events::audio::{AudioCmd, MUSIC_ID};
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

/// Emit the change event when a transition is pending. The observer in
/// [`crate::events::gamestate`] applies it.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Arm the session on the start gesture.
///
/// The host's "click to play" button (or key) lands here as `action_start`.
/// The gesture doubles as the user interaction that allows music to start,
/// so a resume request is queued alongside the transition.
pub fn start_on_action(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if matches!(state.get(), GameStates::None) && input.action_start.just_pressed {
        audio.write(AudioCmd::ResumeMusic {
            id: MUSIC_ID.into(),
        });
        next_state.set(GameStates::Setup);
    }
}

/// Run condition for systems that only make sense mid-session.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}
