//! Signal binding component for reactive text updates.
//!
//! Binds a [`DynamicText`](super::dynamictext::DynamicText) to a value in
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals); the
//! binding system rewrites the text whenever the signal changes. The spore
//! counter on the HUD is the main user.

use bevy_ecs::prelude::Component;

/// Binds a `DynamicText` to a world signal.
///
/// ```ignore
/// commands.spawn((
///     DynamicText::new("Spores: 0", "monospace", 20.0, Rgba::WHITE),
///     SignalBinding::new("spores").with_format("Spores: {}"),
/// ));
/// ```
#[derive(Component, Clone, Debug)]
pub struct SignalBinding {
    /// The key of the signal to read.
    pub signal_key: String,
    /// Optional format string with `{}` as the value placeholder.
    pub format: Option<String>,
}

impl SignalBinding {
    pub fn new(signal_key: impl Into<String>) -> Self {
        Self {
            signal_key: signal_key.into(),
            format: None,
        }
    }

    /// Sets a format string for the displayed value.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
