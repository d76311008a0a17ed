use bevy_ecs::prelude::Component;

/// Marker for decorative glimmers scattered over the glade. They carry no
/// gameplay logic but still participate in depth sorting.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Twinkle;
