use bevy_ecs::prelude::Component;

use super::tint::Rgba;

/// Dynamic text component for rendering variable strings in the world or on
/// the HUD.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font key understood by the host.
    pub font: String,
    /// Font size in world units.
    pub font_size: f32,
    /// Color of the text.
    pub color: Rgba,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(
        content: impl Into<String>,
        font: impl Into<String>,
        font_size: f32,
        color: Rgba,
    ) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            font_size,
            color,
        }
    }

    /// Updates the text content.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
