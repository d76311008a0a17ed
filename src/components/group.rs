use bevy_ecs::prelude::Component;

/// Tag component naming the family an entity belongs to
/// ("spores", "bubbles", "hud", ...).
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn name(&self) -> &str {
        &self.0
    }
}
