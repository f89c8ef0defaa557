//! Per-tick count of active evacuees per cell.

use evac_core::Cell;

use crate::Evacuee;

#[cfg(feature = "fx-hash")]
type CellCounts = rustc_hash::FxHashMap<Cell, u32>;
#[cfg(not(feature = "fx-hash"))]
type CellCounts = std::collections::HashMap<Cell, u32>;

/// Active-evacuee counts keyed by cell.
///
/// Built once from start-of-tick positions and shared read-only by every
/// decision in that tick.  Time complexity of a build: O(population).
#[derive(Default, Debug)]
pub struct OccupancyIndex {
    counts: CellCounts,
}

impl OccupancyIndex {
    pub fn build(evacuees: &[Evacuee]) -> Self {
        let mut counts = CellCounts::default();
        for e in evacuees.iter().filter(|e| e.is_active()) {
            *counts.entry(e.cell).or_insert(0) += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn at(&self, cell: Cell) -> u32 {
        self.counts.get(&cell).copied().unwrap_or(0)
    }

    /// Active evacuees within Manhattan distance `radius` of `center`.
    ///
    /// Walks the diamond around `center` unless it holds more cells than
    /// the index does, in which case the occupied cells are scanned.
    pub fn within(&self, center: Cell, radius: u32) -> u32 {
        let r = u64::from(radius);
        if 2 * r * (r + 1) + 1 > self.counts.len() as u64 {
            return self
                .counts
                .iter()
                .filter(|&(&cell, _)| center.manhattan(cell) <= radius)
                .map(|(_, &n)| n)
                .sum();
        }
        // The diamond is no larger than the index, so `radius` fits an i32.
        let r = radius as i32;
        let mut total = 0;
        for dy in -r..=r {
            let span = r - dy.abs();
            for dx in -span..=span {
                total += self.at(Cell::new(center.x + dx, center.y + dy));
            }
        }
        total
    }

    /// Number of distinct occupied cells.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
