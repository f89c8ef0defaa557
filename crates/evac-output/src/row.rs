//! Plain data row types for the two run-log tables.

use serde::{Deserialize, Serialize};

use evac_sim::{RoundRecord, TickRecord};

/// One row of `convergence.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceRow {
    pub round:            u32,
    /// Shortest successful explorer path so far, in cells; 0 if none yet.
    pub best_path_length: u64,
}

/// One row of `evacuation.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvacuationRow {
    pub tick:         u64,
    pub evacuated:    u64,
    pub remaining:    u64,
    pub hazard_cells: u64,
}

impl From<&RoundRecord> for ConvergenceRow {
    fn from(r: &RoundRecord) -> Self {
        Self { round: r.round, best_path_length: r.best_path_length as u64 }
    }
}

impl From<&TickRecord> for EvacuationRow {
    fn from(r: &TickRecord) -> Self {
        Self {
            tick:         r.tick.0,
            evacuated:    r.evacuated as u64,
            remaining:    r.remaining as u64,
            hazard_cells: r.hazard_cells as u64,
        }
    }
}
