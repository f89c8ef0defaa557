//! The `SpatialGrid`: walls, exits, and hazard cells on a square lattice.
//!
//! # Data layout
//!
//! Membership is stored as dense row-major masks (`index = y * size + x`) so
//! the per-step walkability checks are a bounds test plus two loads.  Exits
//! and hazard cells are additionally kept as ordered lists: exit order
//! decides nearest-exit ties, and the hazard list is what distance scans
//! iterate.
//!
//! # Invariants
//!
//! - A cell is never both a wall and an exit.
//! - A hazard cell is never a wall and never an exit.
//! - `hazard_cells` and the hazard mask always describe the same set.

use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use evac_core::Cell;

/// Distance reported by [`SpatialGrid::hazard_distance`] when no hazard
/// exists anywhere on the grid.
pub const NO_HAZARD_DISTANCE: u32 = 999;

/// Uniform draws attempted by [`SpatialGrid::random_walkable_cell`] before it
/// falls back to a row-major scan.
pub const RANDOM_CELL_ATTEMPTS: usize = 1000;

/// Up to four orthogonal neighbours, in [`evac_core::NEIGHBOR_OFFSETS`] order.
pub type Neighbors = SmallVec<[Cell; 4]>;

pub struct SpatialGrid {
    size:         usize,
    walls:        Vec<bool>,
    exit_mask:    Vec<bool>,
    hazard_mask:  Vec<bool>,
    exits:        Vec<Cell>,
    hazard_cells: Vec<Cell>,
}

impl SpatialGrid {
    /// An empty `size × size` grid: no walls, exits, or hazard.
    pub fn new(size: usize) -> Self {
        let n = size * size;
        Self {
            size,
            walls:        vec![false; n],
            exit_mask:    vec![false; n],
            hazard_mask:  vec![false; n],
            exits:        Vec::new(),
            hazard_cells: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clear walls, exits, and hazard.
    pub fn reset(&mut self) {
        self.walls.fill(false);
        self.exit_mask.fill(false);
        self.hazard_mask.fill(false);
        self.exits.clear();
        self.hazard_cells.clear();
    }

    // ── Membership queries ────────────────────────────────────────────────

    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.in_square(self.size)
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        cell.y as usize * self.size + cell.x as usize
    }

    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.is_valid(cell) && self.walls[self.idx(cell)]
    }

    /// In bounds, not a wall, and not on fire.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        if !self.is_valid(cell) {
            return false;
        }
        let i = self.idx(cell);
        !self.walls[i] && !self.hazard_mask[i]
    }

    #[inline]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.is_valid(cell) && self.exit_mask[self.idx(cell)]
    }

    #[inline]
    pub fn has_hazard(&self, cell: Cell) -> bool {
        self.is_valid(cell) && self.hazard_mask[self.idx(cell)]
    }

    /// Exits in insertion order.
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// Hazard cells in ignition order.
    pub fn hazard_cells(&self) -> &[Cell] {
        &self.hazard_cells
    }

    pub fn hazard_count(&self) -> usize {
        self.hazard_cells.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    // ── Edits ─────────────────────────────────────────────────────────────

    /// Flip the wall state of `cell`.  Returns `false` (no change) for
    /// out-of-bounds cells, exits, and burning cells.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if !self.is_valid(cell) {
            debug!(%cell, "toggle_wall rejected: out of bounds");
            return false;
        }
        let i = self.idx(cell);
        if !self.walls[i] && (self.exit_mask[i] || self.hazard_mask[i]) {
            debug!(%cell, "toggle_wall rejected: cell is an exit or on fire");
            return false;
        }
        self.walls[i] = !self.walls[i];
        true
    }

    /// Set a wall without toggling.  Used by layouts; same rejection rules
    /// as [`toggle_wall`][Self::toggle_wall].
    pub fn set_wall(&mut self, cell: Cell) -> bool {
        if self.is_wall(cell) {
            return false;
        }
        self.toggle_wall(cell)
    }

    /// Mark `cell` as on fire.  No-op for out-of-bounds cells, walls, exits,
    /// and cells already burning.
    pub fn add_hazard(&mut self, cell: Cell) -> bool {
        if !self.is_valid(cell) {
            return false;
        }
        let i = self.idx(cell);
        if self.walls[i] || self.exit_mask[i] || self.hazard_mask[i] {
            return false;
        }
        self.hazard_mask[i] = true;
        self.hazard_cells.push(cell);
        true
    }

    pub fn remove_hazard(&mut self, cell: Cell) -> bool {
        if !self.has_hazard(cell) {
            return false;
        }
        let i = self.idx(cell);
        self.hazard_mask[i] = false;
        self.hazard_cells.retain(|&c| c != cell);
        true
    }

    /// Append an exit.  Rejected for out-of-bounds cells, walls, burning
    /// cells, and existing exits.
    pub fn add_exit(&mut self, cell: Cell) -> bool {
        if !self.is_valid(cell) {
            debug!(%cell, "add_exit rejected: out of bounds");
            return false;
        }
        let i = self.idx(cell);
        if self.walls[i] || self.hazard_mask[i] || self.exit_mask[i] {
            debug!(%cell, "add_exit rejected: wall, hazard, or existing exit");
            return false;
        }
        self.exit_mask[i] = true;
        self.exits.push(cell);
        true
    }

    pub(crate) fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    pub(crate) fn clear_exits(&mut self) {
        for cell in self.exits.drain(..) {
            let i = cell.y as usize * self.size + cell.x as usize;
            self.exit_mask[i] = false;
        }
    }

    // ── Distance queries ──────────────────────────────────────────────────

    /// Nearest exit by Manhattan distance; ties go to the earliest exit in
    /// insertion order.  `None` when the grid has no exits.
    pub fn nearest_exit(&self, cell: Cell) -> Option<Cell> {
        let mut best: Option<(u32, Cell)> = None;
        for &exit in &self.exits {
            let d = cell.manhattan(exit);
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, exit));
            }
        }
        best.map(|(_, exit)| exit)
    }

    /// Manhattan distance to the nearest exit.  Without exits the grid
    /// centre stands in as the goal so movement heuristics stay defined.
    pub fn goal_distance(&self, cell: Cell) -> u32 {
        let goal = self.nearest_exit(cell).unwrap_or_else(|| self.center());
        cell.manhattan(goal)
    }

    pub fn center(&self) -> Cell {
        let c = (self.size / 2) as i32;
        Cell::new(c, c)
    }

    /// Manhattan distance to the nearest hazard cell, or
    /// [`NO_HAZARD_DISTANCE`] if nothing is burning.
    pub fn hazard_distance(&self, cell: Cell) -> u32 {
        self.hazard_cells
            .iter()
            .map(|&h| cell.manhattan(h))
            .min()
            .map_or(NO_HAZARD_DISTANCE, |d| d.min(NO_HAZARD_DISTANCE))
    }

    // ── Neighbourhoods ────────────────────────────────────────────────────

    /// In-bounds neighbours that are neither walls nor on fire.
    pub fn walkable_neighbors(&self, cell: Cell) -> Neighbors {
        cell.neighbors4()
            .into_iter()
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    /// In-bounds, non-wall neighbours, burning or not.  Hazard spread checks
    /// "already on fire" itself; this query deliberately does not.
    pub fn all_walkable_neighbors(&self, cell: Cell) -> Neighbors {
        cell.neighbors4()
            .into_iter()
            .filter(|&n| self.is_valid(n) && !self.walls[self.idx(n)])
            .collect()
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// A uniformly drawn walkable cell not in `avoid`.
    ///
    /// Tries [`RANDOM_CELL_ATTEMPTS`] uniform draws, then falls back to the
    /// first qualifying cell in row-major order.  `None` only if no cell
    /// qualifies at all.
    pub fn random_walkable_cell<R: Rng + ?Sized>(&self, rng: &mut R, avoid: &[Cell]) -> Option<Cell> {
        if self.size == 0 {
            return None;
        }
        let qualifies = |c: Cell| self.is_walkable(c) && !avoid.contains(&c);
        let n = self.size as i32;
        for _ in 0..RANDOM_CELL_ATTEMPTS {
            let c = Cell::new(rng.gen_range(0..n), rng.gen_range(0..n));
            if qualifies(c) {
                return Some(c);
            }
        }
        (0..n)
            .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
            .find(|&c| qualifies(c))
    }
}
