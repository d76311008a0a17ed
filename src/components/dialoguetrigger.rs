//! Fixed dialogue trigger points.

use bevy_ecs::prelude::Component;

/// A fixed point that fires a one-line speech bubble when the wanderer
/// comes close.
///
/// `last_fired` holds the [`WorldTime`](crate::resources::worldtime::WorldTime)
/// elapsed stamp of the latest firing and gates re-firing together with the
/// configured cooldown. Triggers are never despawned; each one cools down
/// independently of the others.
#[derive(Component, Clone, Debug)]
pub struct DialogueTrigger {
    pub text: String,
    pub last_fired: Option<f32>,
}

impl DialogueTrigger {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            last_fired: None,
        }
    }

    /// Whether the cooldown allows firing at time `now`.
    pub fn ready(&self, now: f32, cooldown: f32) -> bool {
        match self.last_fired {
            None => true,
            Some(stamp) => now - stamp >= cooldown,
        }
    }
}
