//! `EvacueePopulation`: placement and the per-tick decide/apply step.

use smallvec::SmallVec;
use tracing::debug;

use evac_core::{AgentId, AgentRng, Cell, EvacuationConfig, SearchWeights, SimRng};
use evac_grid::SpatialGrid;
use evac_trail::TrailField;

use crate::{Evacuee, EvacueeStatus, OccupancyIndex, Statistics, move_score};

// ── Decisions ─────────────────────────────────────────────────────────────────

/// What one evacuee will do this tick.  Produced against the start-of-tick
/// snapshot, applied afterwards in id order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decision {
    /// Already evacuated or a casualty.
    Inactive,
    /// Standing on an exit.
    Evacuate,
    /// Standing on a burning cell.
    Casualty,
    /// No walkable neighbour.  Carries the relocation target when this tick
    /// pushes the stuck counter past its threshold.
    Blocked { relocate_to: Option<Cell> },
    /// Every neighbour scored zero; stay put.
    Hold,
    MoveTo(Cell),
}

/// Decide one evacuee's action.  Reads only; the RNG is the evacuee's own.
pub fn decide(
    evacuee:   &Evacuee,
    grid:      &SpatialGrid,
    trail:     &TrailField,
    weights:   &SearchWeights,
    config:    &EvacuationConfig,
    occupancy: &OccupancyIndex,
    rng:       &mut AgentRng,
) -> Decision {
    if !evacuee.is_active() {
        return Decision::Inactive;
    }
    let here = evacuee.cell;
    if grid.is_exit(here) {
        return Decision::Evacuate;
    }
    if grid.has_hazard(here) {
        return Decision::Casualty;
    }

    let neighbors = grid.walkable_neighbors(here);
    if neighbors.is_empty() {
        let relocate_to = if evacuee.stuck_counter + 1 > config.stuck_threshold {
            grid.random_walkable_cell(rng.inner(), &[])
        } else {
            None
        };
        return Decision::Blocked { relocate_to };
    }

    let radius = config.congestion_radius;
    let mut candidates: SmallVec<[Cell; 4]> = SmallVec::new();
    let mut scores: SmallVec<[f64; 4]> = SmallVec::new();
    for n in neighbors {
        // The index counts this evacuee too; discount it where it reaches.
        let own = u32::from(here.manhattan(n) <= radius);
        let nearby = occupancy.within(n, radius).saturating_sub(own);
        let score = move_score(n, nearby, grid, trail, weights, config);
        if score > 0.0 {
            candidates.push(n);
            scores.push(score);
        }
    }

    match rng.weighted_index(&scores) {
        Some(i) => Decision::MoveTo(candidates[i]),
        None => Decision::Hold,
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// All evacuees of a run plus their RNG streams.
///
/// RNGs live in a parallel `Vec` so the decide phase can borrow evacuees
/// immutably and RNGs mutably at the same time.  Evacuees are never removed;
/// statistics filter on status.
pub struct EvacueePopulation {
    evacuees:    Vec<Evacuee>,
    rngs:        Vec<AgentRng>,
    history_len: usize,
}

impl EvacueePopulation {
    /// Place `count` evacuees on random walkable non-exit cells.
    ///
    /// Placement draws come from `rng`; each evacuee's movement stream is
    /// seeded from one further draw and its id.  If the grid runs out of
    /// qualifying cells the population is smaller than requested.
    pub fn new(count: usize, grid: &SpatialGrid, rng: &mut SimRng, history_len: usize) -> Self {
        let stream_seed: u64 = rng.random();
        let mut evacuees = Vec::with_capacity(count);
        let mut rngs = Vec::with_capacity(count);
        for i in 0..count {
            let Some(cell) = grid.random_walkable_cell(rng.inner(), grid.exits()) else {
                debug!(placed = i, requested = count, "evacuee placement stopped: no free cell");
                break;
            };
            let id = AgentId(i as u32);
            evacuees.push(Evacuee::new(id, cell, history_len));
            rngs.push(AgentRng::new(stream_seed, id));
        }
        Self { evacuees, rngs, history_len }
    }

    /// Build a population at explicit cells.  Ids follow slice order.
    pub fn at_cells(cells: &[Cell], stream_seed: u64, history_len: usize) -> Self {
        let evacuees = cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| Evacuee::new(AgentId(i as u32), cell, history_len))
            .collect::<Vec<_>>();
        let rngs = evacuees.iter().map(|e| AgentRng::new(stream_seed, e.id)).collect();
        Self { evacuees, rngs, history_len }
    }

    pub fn evacuees(&self) -> &[Evacuee] {
        &self.evacuees
    }

    pub fn len(&self) -> usize {
        self.evacuees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evacuees.is_empty()
    }

    pub fn has_active(&self) -> bool {
        self.evacuees.iter().any(Evacuee::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.evacuees.iter().filter(|e| e.is_active()).count()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_evacuees(&self.evacuees)
    }

    /// Advance every active evacuee by one tick.
    pub fn step(
        &mut self,
        grid:    &SpatialGrid,
        trail:   &TrailField,
        weights: &SearchWeights,
        config:  &EvacuationConfig,
    ) {
        let occupancy = OccupancyIndex::build(&self.evacuees);
        let decisions = self.decide_all(grid, trail, weights, config, &occupancy);
        for (i, decision) in decisions.into_iter().enumerate() {
            self.apply(i, decision, config);
        }
    }

    fn decide_all(
        &mut self,
        grid:      &SpatialGrid,
        trail:     &TrailField,
        weights:   &SearchWeights,
        config:    &EvacuationConfig,
        occupancy: &OccupancyIndex,
    ) -> Vec<Decision> {
        let evacuees = &self.evacuees;
        let rngs     = &mut self.rngs;

        #[cfg(not(feature = "parallel"))]
        {
            evacuees
                .iter()
                .zip(rngs.iter_mut())
                .map(|(e, rng)| decide(e, grid, trail, weights, config, occupancy, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            evacuees
                .par_iter()
                .zip(rngs.par_iter_mut())
                .map(|(e, rng)| decide(e, grid, trail, weights, config, occupancy, rng))
                .collect()
        }
    }

    pub(crate) fn apply(&mut self, index: usize, decision: Decision, config: &EvacuationConfig) {
        let history_len = self.history_len;
        let e = &mut self.evacuees[index];
        match decision {
            Decision::Inactive | Decision::Hold => {}
            Decision::Evacuate => e.status = EvacueeStatus::Evacuated,
            Decision::Casualty => e.status = EvacueeStatus::Casualty,
            Decision::Blocked { relocate_to } => {
                e.stuck_counter += 1;
                if e.stuck_counter > config.stuck_threshold {
                    if let Some(cell) = relocate_to {
                        e.cell = cell;
                        e.stuck_counter = 0;
                        e.reroute_count += 1;
                    }
                }
            }
            Decision::MoveTo(cell) => {
                e.cell = cell;
                e.remember(cell, history_len);
                e.stuck_counter = 0;
                e.evacuation_time += 1;
            }
        }
    }
}
