//! `HazardModel`: ignition, growth, and spread.

use tracing::{debug, info};

use evac_core::{Cell, HazardConfig, HazardId, SimRng, Tick};
use evac_grid::SpatialGrid;

use crate::HazardInstance;

pub struct HazardModel {
    config:       HazardConfig,
    instances:    Vec<HazardInstance>,
    source_count: usize,
    ignited:      bool,
    rng:          SimRng,
}

impl HazardModel {
    /// A model that will ignite `source_count` sources once the ignition
    /// delay has passed.  `rng` should be a dedicated child stream.
    pub fn new(config: HazardConfig, source_count: usize, rng: SimRng) -> Self {
        Self {
            config,
            instances: Vec::new(),
            source_count,
            ignited: false,
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn instances(&self) -> &[HazardInstance] {
        &self.instances
    }

    pub fn count(&self) -> usize {
        self.instances.len()
    }

    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// `true` once the scheduled sources have been placed.
    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    pub fn config(&self) -> &HazardConfig {
        &self.config
    }

    // ── Update ────────────────────────────────────────────────────────────

    /// Advance the hazard by one evacuation tick.
    pub fn update(&mut self, tick: Tick, grid: &mut SpatialGrid) {
        if !self.ignited && tick.0 >= self.config.ignition_delay {
            let placed = self.ignite_sources(grid);
            self.ignited = true;
            info!(%tick, placed, requested = self.source_count, "hazard ignited");
        }

        let (period, cap) = (self.config.growth_period, self.config.max_intensity);
        for instance in &mut self.instances {
            instance.update(period, cap);
        }

        self.spread(grid);
    }

    /// Start a new instance at `cell`.  Rejected (returns `false`) for cells
    /// the grid refuses to set on fire: out of bounds, walls, exits, or
    /// already burning.
    pub fn ignite_at(&mut self, cell: Cell, grid: &mut SpatialGrid) -> bool {
        if !grid.add_hazard(cell) {
            return false;
        }
        let id = HazardId(self.instances.len() as u32);
        self.instances.push(HazardInstance::new(id, cell));
        true
    }

    /// Place the scheduled sources.  Each source gets up to
    /// `placement_attempts` random candidates; a candidate is accepted only
    /// if it is strictly farther than `min_exit_clearance` from every exit.
    /// A source with no acceptable candidate is skipped.
    ///
    /// Returns the number of sources actually placed.
    fn ignite_sources(&mut self, grid: &mut SpatialGrid) -> usize {
        let mut placed = 0;
        for source in 0..self.source_count {
            let mut lit = false;
            for _ in 0..self.config.placement_attempts {
                let exits = grid.exits();
                let Some(candidate) = grid.random_walkable_cell(self.rng.inner(), exits) else {
                    break;
                };
                // No exits: nothing to keep clear of.
                let clear = grid
                    .nearest_exit(candidate)
                    .is_none_or(|exit| candidate.manhattan(exit) > self.config.min_exit_clearance);
                if clear && self.ignite_at(candidate, grid) {
                    lit = true;
                    break;
                }
            }
            if lit {
                placed += 1;
            } else {
                debug!(source, attempts = self.config.placement_attempts, "hazard source skipped: no cell clear of exits");
            }
        }
        placed
    }

    /// One spread pass.  Every instance rolls once per non-wall neighbour
    /// that is not yet burning; successes are collected against the current
    /// hazard set and applied only after all instances have rolled.
    fn spread(&mut self, grid: &mut SpatialGrid) {
        let rate = self.config.spread_rate;
        let mut ignitions: Vec<Cell> = Vec::new();
        for instance in &self.instances {
            let p = instance.spread_probability(rate);
            for n in grid.all_walkable_neighbors(instance.cell) {
                if grid.has_hazard(n) {
                    continue;
                }
                if self.rng.gen_bool(p) {
                    ignitions.push(n);
                }
            }
        }
        // Exits and duplicates are rejected by `ignite_at`.
        for cell in ignitions {
            self.ignite_at(cell, grid);
        }
    }
}
