//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide key/value map for
//! cross-system data that does not deserve its own resource type: HUD
//! values, scene names, one-off flags. The spore counter is published here
//! so bound text entities can display it.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Integer signals addressed by string keys.
    integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Remove a flag (make it false/absent).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_roundtrip() {
        let mut signals = WorldSignals::default();
        signals.set_integer("spores", 4);
        assert_eq!(signals.get_integer("spores"), Some(4));
        assert_eq!(signals.get_integer("missing"), None);
    }

    #[test]
    fn test_flags() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("session_started"));
        signals.set_flag("session_started");
        assert!(signals.has_flag("session_started"));
        signals.clear_flag("session_started");
        assert!(!signals.has_flag("session_started"));
    }

    #[test]
    fn test_string_roundtrip() {
        let mut signals = WorldSignals::default();
        signals.set_string("scene", "glade");
        assert_eq!(signals.get_string("scene").map(String::as_str), Some("glade"));
    }
}
