//! Dynamic draw-order assignment.
//!
//! The glade has two static foreground art layers (bushes and front
//! bushes), each painted in several horizontal strips. Walking down the
//! screen, an entity alternates between being hidden by a strip and
//! standing in front of it, which this system fakes by rewriting `ZIndex`
//! from the entity's y each tick. No z-buffer, just band lookup.

use bevy_ecs::prelude::*;

use crate::components::depthsorted::DepthSorted;
use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;

/// Drawn under both bush layers (the host paints bushes at 1 and 3).
pub const DEPTH_BEHIND_LAYERS: i32 = 2;
/// Drawn between the bush layer and the front-bush layer.
pub const DEPTH_BETWEEN_LAYERS: i32 = 4;
/// Drawn over both layers.
pub const DEPTH_IN_FRONT: i32 = 5;

/// Depth band lookup for a vertical coordinate.
///
/// `bush` and `front` are the strictly increasing lower edges of the band
/// pairs, pairwise ordered bush < front. The bands are checked in order and
/// the first match wins; they are not mutually exclusive under any single
/// comparison, so the order is load-bearing:
///
/// 1. `y < bush[i]` → behind the layers
/// 2. `bush[i] <= y < front[i]` → behind the layers
/// 3. `front[i] <= y` and (`i` is last or `y < bush[i+1]`) → between layers
///
/// Past the last front edge with no band matched, the entity is in front of
/// everything.
pub fn depth_for_y(y: f32, bush: &[f32], front: &[f32]) -> i32 {
    debug_assert_eq!(bush.len(), front.len());
    for i in 0..bush.len() {
        if y < bush[i] {
            return DEPTH_BEHIND_LAYERS;
        }
        if y >= bush[i] && y < front[i] {
            return DEPTH_BEHIND_LAYERS;
        }
        if y >= front[i] && (i == bush.len() - 1 || y < bush[i + 1]) {
            return DEPTH_BETWEEN_LAYERS;
        }
    }
    match front.last() {
        Some(&last_front) if y >= last_front => DEPTH_IN_FRONT,
        _ => DEPTH_BEHIND_LAYERS,
    }
}

/// Recompute the draw order of every depth-sorted entity from its position.
pub fn assign_depth(
    mut query: Query<(&MapPosition, &mut ZIndex), With<DepthSorted>>,
    config: Res<GameConfig>,
) {
    for (position, mut z) in query.iter_mut() {
        let depth = depth_for_y(
            position.pos.y,
            &config.bush_thresholds,
            &config.front_thresholds,
        );
        if z.0 != depth {
            z.0 = depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUSH: [f32; 4] = [228.0, 324.0, 453.0, 675.0];
    const FRONT: [f32; 4] = [261.0, 357.0, 485.0, 698.0];

    #[test]
    fn test_above_first_band_is_behind() {
        assert_eq!(depth_for_y(0.0, &BUSH, &FRONT), DEPTH_BEHIND_LAYERS);
        assert_eq!(depth_for_y(227.9, &BUSH, &FRONT), DEPTH_BEHIND_LAYERS);
    }

    #[test]
    fn test_inside_band_is_behind() {
        assert_eq!(depth_for_y(228.0, &BUSH, &FRONT), DEPTH_BEHIND_LAYERS);
        assert_eq!(depth_for_y(260.9, &BUSH, &FRONT), DEPTH_BEHIND_LAYERS);
    }

    #[test]
    fn test_past_front_edge_is_between() {
        assert_eq!(depth_for_y(261.0, &BUSH, &FRONT), DEPTH_BETWEEN_LAYERS);
        assert_eq!(depth_for_y(300.0, &BUSH, &FRONT), DEPTH_BETWEEN_LAYERS);
    }

    #[test]
    fn test_full_sweep_transitions_at_exact_boundaries() {
        // The band table for the default glade thresholds, walked from the
        // top of the screen to the bottom.
        let expected = [
            (0.0, DEPTH_BEHIND_LAYERS),
            (227.9, DEPTH_BEHIND_LAYERS),
            (228.0, DEPTH_BEHIND_LAYERS),
            (260.9, DEPTH_BEHIND_LAYERS),
            (261.0, DEPTH_BETWEEN_LAYERS),
            (323.9, DEPTH_BETWEEN_LAYERS),
            (324.0, DEPTH_BEHIND_LAYERS),
            (356.9, DEPTH_BEHIND_LAYERS),
            (357.0, DEPTH_BETWEEN_LAYERS),
            (452.9, DEPTH_BETWEEN_LAYERS),
            (453.0, DEPTH_BEHIND_LAYERS),
            (484.9, DEPTH_BEHIND_LAYERS),
            (485.0, DEPTH_BETWEEN_LAYERS),
            (674.9, DEPTH_BETWEEN_LAYERS),
            (675.0, DEPTH_BEHIND_LAYERS),
            (697.9, DEPTH_BEHIND_LAYERS),
            (698.0, DEPTH_BETWEEN_LAYERS),
            (720.0, DEPTH_BETWEEN_LAYERS),
        ];
        for (y, depth) in expected {
            assert_eq!(depth_for_y(y, &BUSH, &FRONT), depth, "at y={y}");
        }
    }

    #[test]
    fn test_pure_function_of_y() {
        for y in [0.0, 250.0, 340.0, 500.0, 700.0] {
            assert_eq!(
                depth_for_y(y, &BUSH, &FRONT),
                depth_for_y(y, &BUSH, &FRONT)
            );
        }
    }

    #[test]
    fn test_single_band() {
        let bush = [100.0];
        let front = [150.0];
        assert_eq!(depth_for_y(50.0, &bush, &front), DEPTH_BEHIND_LAYERS);
        assert_eq!(depth_for_y(120.0, &bush, &front), DEPTH_BEHIND_LAYERS);
        assert_eq!(depth_for_y(150.0, &bush, &front), DEPTH_BETWEEN_LAYERS);
        assert_eq!(depth_for_y(9000.0, &bush, &front), DEPTH_BETWEEN_LAYERS);
    }

    #[test]
    fn test_empty_bands_default_to_behind() {
        assert_eq!(depth_for_y(360.0, &[], &[]), DEPTH_BEHIND_LAYERS);
    }
}
