//! Everything one run owns, rebuilt wholesale by `initialize` and `reset`.

use evac_core::{RunParams, SimConfig, SimRng, Tick};
use evac_colony::{ExplorerColony, ExplorerSpawn};
use evac_crowd::EvacueePopulation;
use evac_grid::SpatialGrid;
use evac_hazard::HazardModel;
use evac_trail::TrailField;

use crate::{RoundRecord, TickRecord};

// Child stream offsets of the master RNG.
const PLACEMENT_STREAM: u64 = 1;
const HAZARD_STREAM:    u64 = 2;
const COLONY_STREAM:    u64 = 3;

pub(crate) struct RunState {
    pub grid:            SpatialGrid,
    pub trail:           TrailField,
    pub hazards:         HazardModel,
    pub colony:          ExplorerColony,
    pub population:      EvacueePopulation,
    pub exploration_log: Vec<RoundRecord>,
    pub evacuation_log:  Vec<TickRecord>,
    pub round:           u32,
    pub tick:            Tick,
}

impl RunState {
    /// Blank state for an uninitialized controller: empty grid, nobody
    /// placed, nothing scheduled to ignite.
    pub fn empty(config: &SimConfig, spawn: &ExplorerSpawn) -> Self {
        Self::build(config, SpatialGrid::new(config.grid.size), RunParams {
            population:     0,
            exit_count:     0,
            hazard_sources: 0,
        }, spawn)
    }

    /// Lay out the floor plan and exits, then place the population.
    pub fn prepare(config: &SimConfig, params: RunParams, spawn: &ExplorerSpawn) -> Self {
        let mut grid = SpatialGrid::new(config.grid.size);
        grid.apply_layout(config.grid.layout);
        grid.initialize_exits(params.exit_count);
        Self::build(config, grid, params, spawn)
    }

    fn build(config: &SimConfig, grid: SpatialGrid, params: RunParams, spawn: &ExplorerSpawn) -> Self {
        let mut master = SimRng::new(config.seed);
        let mut placement = master.child(PLACEMENT_STREAM);
        let hazard_rng = master.child(HAZARD_STREAM);
        let colony_rng = master.child(COLONY_STREAM);

        let population = EvacueePopulation::new(
            params.population,
            &grid,
            &mut placement,
            config.evacuation.history_len,
        );
        let hazards = HazardModel::new(config.hazard.clone(), params.hazard_sources, hazard_rng);
        let colony = ExplorerColony::new(config.colony.clone(), config.weights, colony_rng)
            .with_spawn(spawn.clone());

        Self {
            trail: TrailField::new(config.grid.size, config.colony.evaporation_rate),
            grid,
            hazards,
            colony,
            population,
            exploration_log: Vec::new(),
            evacuation_log:  Vec::new(),
            round:           0,
            tick:            Tick::ZERO,
        }
    }
}
