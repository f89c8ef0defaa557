//! Move scoring for evacuees.
//!
//!   score = trail^alpha × (1 / (goal_distance + 1))^beta × hazard_penalty × congestion
//!
//! A burning cell scores exactly 0.  Every other factor is floored above
//! zero, so a reachable cell is never ruled out by proximity or crowding
//! alone.

use evac_core::{Cell, EvacuationConfig, SearchWeights};
use evac_grid::SpatialGrid;
use evac_trail::TrailField;

/// Lowest hazard penalty applied to a non-burning cell.
pub const MIN_HAZARD_PENALTY: f64 = 0.01;

/// Lowest congestion factor applied to any cell.
pub const MIN_CONGESTION_FACTOR: f64 = 0.1;

/// `1.0` at or beyond `awareness_range`, otherwise
/// `base^(awareness_range - distance)` floored at [`MIN_HAZARD_PENALTY`].
pub fn hazard_penalty(distance: u32, config: &EvacuationConfig) -> f64 {
    let range = config.hazard_awareness_range;
    if distance >= range {
        return 1.0;
    }
    let exp = (range - distance).min(i32::MAX as u32) as i32;
    config.hazard_penalty_base.powi(exp).max(MIN_HAZARD_PENALTY)
}

/// `1.0` with nobody nearby, otherwise `1 / (1 + penalty × count)` floored
/// at [`MIN_CONGESTION_FACTOR`].
pub fn congestion_factor(nearby: u32, config: &EvacuationConfig) -> f64 {
    if nearby == 0 {
        return 1.0;
    }
    let f = 1.0 / (1.0 + config.congestion_penalty * nearby as f64);
    f.max(MIN_CONGESTION_FACTOR)
}

/// Full score of stepping onto `cell`, given `nearby` other active evacuees
/// within the congestion radius of it.
pub fn move_score(
    cell:    Cell,
    nearby:  u32,
    grid:    &SpatialGrid,
    trail:   &TrailField,
    weights: &SearchWeights,
    config:  &EvacuationConfig,
) -> f64 {
    if grid.has_hazard(cell) {
        return 0.0;
    }
    let base = weights.weight(trail.get(cell), grid.goal_distance(cell));
    let penalty = hazard_penalty(grid.hazard_distance(cell), config);
    (base * penalty * congestion_factor(nearby, config)).max(0.0)
}
