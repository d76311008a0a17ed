//! Signal binding system for reactive text updates.
//!
//! Synchronizes [`DynamicText`](crate::components::dynamictext::DynamicText)
//! content with the world signal named by each entity's
//! [`SignalBinding`](crate::components::signalbinding::SignalBinding).
//! Signal types are tried in order: integer, string, flag.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::signalbinding::SignalBinding;
use crate::resources::worldsignals::WorldSignals;

pub fn update_signal_bindings(
    mut query: Query<(&mut DynamicText, &SignalBinding)>,
    signals: Res<WorldSignals>,
) {
    for (mut text, binding) in query.iter_mut() {
        let Some(value) = signal_as_string(&signals, &binding.signal_key) else {
            continue;
        };
        let content = match &binding.format {
            Some(format) => format.replace("{}", &value),
            None => value,
        };
        if text.content != content {
            text.content = content;
        }
    }
}

/// Render a signal value as a display string, trying each type in order.
fn signal_as_string(signals: &WorldSignals, key: &str) -> Option<String> {
    if let Some(value) = signals.get_integer(key) {
        return Some(value.to_string());
    }
    if let Some(value) = signals.get_string(key) {
        return Some(value.clone());
    }
    if signals.has_flag(key) {
        return Some("true".to_string());
    }
    None
}
