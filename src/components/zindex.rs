//! Z-index component for render ordering.
//!
//! Entities with higher z-index values are drawn on top of those with lower
//! values. The renderer sorts by `ZIndex` for a painter's algorithm; the
//! depth system rewrites it every tick for
//! [`DepthSorted`](super::depthsorted::DepthSorted) entities.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
