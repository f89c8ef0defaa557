//! `ExplorerColony`: spawns, walks, and scores explorers round by round.

use tracing::debug;

use evac_core::{AgentId, AgentRng, Cell, ColonyConfig, SearchWeights, SimRng};
use evac_grid::SpatialGrid;
use evac_trail::TrailField;

use crate::Explorer;

/// Where explorers start each round.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExplorerSpawn {
    /// A fresh uniformly drawn walkable cell per explorer per round.
    #[default]
    Random,
    /// Explorer `i` starts at `cells[i % cells.len()]`.  Listed cells that
    /// are not walkable fall back to a random cell; an empty list behaves
    /// like `Random`.
    At(Vec<Cell>),
}

/// Summary of one exploration round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRecord {
    /// 1-based round index.
    pub round:            u32,
    /// Explorers that reached an exit this round.
    pub successful:       usize,
    /// Shortest successful path (in cells) seen in any round so far; 0 if
    /// no explorer has succeeded yet.
    pub best_path_length: usize,
    /// Mean trail strength after this round's evaporation.
    pub mean_trail:       f64,
}

pub struct ExplorerColony {
    config:    ColonyConfig,
    weights:   SearchWeights,
    spawn:     ExplorerSpawn,
    explorers: Vec<Explorer>,
    rng:       SimRng,
    best_path: Option<usize>,
    rounds:    u32,
}

impl ExplorerColony {
    pub fn new(config: ColonyConfig, weights: SearchWeights, rng: SimRng) -> Self {
        Self {
            config,
            weights,
            spawn: ExplorerSpawn::Random,
            explorers: Vec::new(),
            rng,
            best_path: None,
            rounds: 0,
        }
    }

    pub fn with_spawn(mut self, spawn: ExplorerSpawn) -> Self {
        self.spawn = spawn;
        self
    }

    /// Explorers from the most recent round, in their end-of-round state.
    pub fn explorers(&self) -> &[Explorer] {
        &self.explorers
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds
    }

    pub fn best_path_length(&self) -> Option<usize> {
        self.best_path
    }

    /// Run one full round against `grid`, reinforcing and evaporating `trail`.
    pub fn run_round(&mut self, grid: &SpatialGrid, trail: &mut TrailField) -> RoundRecord {
        let mut rngs = self.populate(grid);
        self.walk_all(grid, trail, &mut rngs);

        let mut successful = 0;
        for explorer in self.explorers.iter().filter(|e| e.found_exit) {
            successful += 1;
            let len = explorer.path_len();
            trail.deposit_path(&explorer.path, self.config.deposit_reward / len as f64);
            if self.best_path.is_none_or(|best| len < best) {
                self.best_path = Some(len);
            }
        }
        trail.evaporate();
        self.rounds += 1;

        RoundRecord {
            round:            self.rounds,
            successful,
            best_path_length: self.best_path.unwrap_or(0),
            mean_trail:       trail.average_value(),
        }
    }

    /// Rebuild the explorer list and return one RNG per explorer.
    fn populate(&mut self, grid: &SpatialGrid) -> Vec<AgentRng> {
        let round_seed: u64 = self.rng.random();
        self.explorers.clear();
        let mut rngs = Vec::with_capacity(self.config.explorer_count);

        for i in 0..self.config.explorer_count {
            let pinned = match &self.spawn {
                ExplorerSpawn::At(cells) if !cells.is_empty() => {
                    Some(cells[i % cells.len()]).filter(|&c| grid.is_walkable(c))
                }
                _ => None,
            };
            let start = match pinned {
                Some(c) => c,
                None => match grid.random_walkable_cell(self.rng.inner(), &[]) {
                    Some(c) => c,
                    None => {
                        debug!("explorer spawn skipped: no walkable cell");
                        break;
                    }
                },
            };
            let id = AgentId(i as u32);
            self.explorers.push(Explorer::new(id, start));
            rngs.push(AgentRng::new(round_seed, id));
        }
        rngs
    }

    fn walk_all(&mut self, grid: &SpatialGrid, trail: &TrailField, rngs: &mut [AgentRng]) {
        let weights = &self.weights;
        let budget = self.config.move_budget;
        let stuck = self.config.stuck_threshold;

        #[cfg(not(feature = "parallel"))]
        {
            for (explorer, rng) in self.explorers.iter_mut().zip(rngs.iter_mut()) {
                explorer.walk(grid, trail, weights, budget, stuck, rng);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.explorers
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .for_each(|(explorer, rng)| explorer.walk(grid, trail, weights, budget, stuck, rng));
        }
    }
}
