//! A single exploratory walker.

use std::collections::HashSet;

use smallvec::SmallVec;

use evac_core::{AgentId, AgentRng, Cell, SearchWeights};
use evac_grid::SpatialGrid;
use evac_trail::TrailField;

#[derive(Clone, Debug)]
pub struct Explorer {
    pub id:            AgentId,
    pub cell:          Cell,
    /// Cells occupied since the last (re)start, starting cell included.
    pub path:          Vec<Cell>,
    visited:           HashSet<Cell>,
    pub found_exit:    bool,
    pub stuck_counter: u32,
}

impl Explorer {
    pub fn new(id: AgentId, cell: Cell) -> Self {
        Self {
            id,
            cell,
            path: vec![cell],
            visited: HashSet::from([cell]),
            found_exit: false,
            stuck_counter: 0,
        }
    }

    /// Number of cells on the recorded path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn has_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Start over at `cell` with an empty history.
    fn restart(&mut self, cell: Cell) {
        *self = Explorer::new(self.id, cell);
    }

    /// Take up to `move_budget` steps, stopping as soon as an exit is reached.
    pub fn walk(
        &mut self,
        grid:            &SpatialGrid,
        trail:           &TrailField,
        weights:         &SearchWeights,
        move_budget:     u32,
        stuck_threshold: u32,
        rng:             &mut AgentRng,
    ) {
        for _ in 0..move_budget {
            if self.found_exit {
                break;
            }
            self.step(grid, trail, weights, stuck_threshold, rng);
        }
    }

    /// One movement attempt.
    ///
    /// Visited neighbours are dropped when there is more than one neighbour.
    /// If that leaves nothing, the explorer picks uniformly among all
    /// neighbours.  Otherwise the draw is weighted by
    /// [`SearchWeights::weight`].
    pub fn step(
        &mut self,
        grid:            &SpatialGrid,
        trail:           &TrailField,
        weights:         &SearchWeights,
        stuck_threshold: u32,
        rng:             &mut AgentRng,
    ) {
        if self.found_exit {
            return;
        }
        if grid.is_exit(self.cell) {
            self.found_exit = true;
            return;
        }

        let neighbors = grid.walkable_neighbors(self.cell);
        if neighbors.is_empty() {
            self.stuck_counter += 1;
            if self.stuck_counter > stuck_threshold {
                if let Some(cell) = grid.random_walkable_cell(rng.inner(), &[]) {
                    self.restart(cell);
                }
            }
            return;
        }

        let mut candidates: SmallVec<[Cell; 4]> = SmallVec::new();
        let mut scores: SmallVec<[f64; 4]> = SmallVec::new();
        for &n in &neighbors {
            if neighbors.len() > 1 && self.visited.contains(&n) {
                continue;
            }
            candidates.push(n);
            scores.push(weights.weight(trail.get(n), grid.goal_distance(n)));
        }
        if candidates.is_empty() {
            candidates = neighbors;
            scores = SmallVec::from_elem(1.0, candidates.len());
        }

        let Some(i) = rng.weighted_index(&scores) else {
            return;
        };
        let next = candidates[i];
        self.cell = next;
        self.path.push(next);
        self.visited.insert(next);
        self.stuck_counter = 0;
        if grid.is_exit(next) {
            self.found_exit = true;
        }
    }
}
