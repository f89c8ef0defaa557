//! Per-round and per-tick log records.

use evac_core::Tick;

pub use evac_colony::RoundRecord;

/// One row of the evacuation log, taken after the tick's moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickRecord {
    /// 1-based evacuation tick.
    pub tick:         Tick,
    pub evacuated:    usize,
    pub remaining:    usize,
    pub hazard_cells: usize,
}
