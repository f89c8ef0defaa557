use crate::{Evacuee, EvacueeStatus};

/// Aggregate outcome of an evacuation, recomputed from the population on
/// demand.
///
/// `evacuated + remaining + casualties == total` always holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub total:                usize,
    pub evacuated:            usize,
    /// Still active.
    pub remaining:            usize,
    pub casualties:           usize,
    /// `evacuated / total × 100`; 0 for an empty population.
    pub progress_pct:         f64,
    /// Mean `evacuation_time` over evacuated agents; 0 if none evacuated.
    pub mean_evacuation_time: f64,
    pub total_reroutes:       u64,
}

impl Statistics {
    pub fn from_evacuees(evacuees: &[Evacuee]) -> Self {
        let total = evacuees.len();
        let mut evacuated = 0;
        let mut remaining = 0;
        let mut time_sum = 0u64;
        let mut total_reroutes = 0u64;
        for e in evacuees {
            match e.status {
                EvacueeStatus::Evacuated => {
                    evacuated += 1;
                    time_sum += e.evacuation_time as u64;
                }
                EvacueeStatus::Active => remaining += 1,
                EvacueeStatus::Casualty => {}
            }
            total_reroutes += e.reroute_count as u64;
        }
        Self {
            total,
            evacuated,
            remaining,
            casualties: total - evacuated - remaining,
            progress_pct: if total > 0 { evacuated as f64 / total as f64 * 100.0 } else { 0.0 },
            mean_evacuation_time: if evacuated > 0 { time_sum as f64 / evacuated as f64 } else { 0.0 },
            total_reroutes,
        }
    }
}
