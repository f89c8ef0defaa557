//! The `Simulation` controller.

use tracing::{info, warn};

use evac_colony::{Explorer, ExplorerSpawn};
use evac_core::{Cell, RunParams, SimConfig, Tick};
use evac_crowd::{Evacuee, Statistics};
use evac_grid::SpatialGrid;
use evac_hazard::HazardInstance;
use evac_trail::TrailField;

use crate::state::RunState;
use crate::workers::Workers;
use crate::{NoopObserver, Phase, RoundRecord, SimObserver, TickRecord};

/// Sequences exploration rounds and evacuation ticks over one owned
/// [`RunState`].
///
/// Phase-control misuse (starting before `initialize`, editing while
/// running) is a logged no-op, never an error.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    config:      SimConfig,
    spawn:       ExplorerSpawn,
    state:       RunState,
    phase:       Phase,
    initialized: bool,
    running:     bool,
    workers:     Workers,
}

impl Simulation {
    pub(crate) fn from_parts(
        config:  SimConfig,
        spawn:   ExplorerSpawn,
        state:   RunState,
        workers: Workers,
    ) -> Self {
        Self {
            config,
            spawn,
            state,
            phase: Phase::Idle,
            initialized: false,
            running: false,
            workers,
        }
    }

    // ── Phase control ─────────────────────────────────────────────────────

    /// Build a fresh run: floor plan, exits, population, hazard schedule,
    /// and an empty trail field.  Discards any previous run (including its
    /// logs) and leaves the controller `Idle` and stopped.
    ///
    /// `params` is used as given; clamp with
    /// [`RunParams::clamped`][evac_core::RunParams::clamped] at the boundary.
    pub fn initialize(&mut self, params: RunParams) {
        self.state = RunState::prepare(&self.config, params, &self.spawn);
        self.phase = Phase::Idle;
        self.initialized = true;
        self.running = false;
        info!(
            population = self.state.population.len(),
            exits = self.state.grid.exits().len(),
            hazard_sources = params.hazard_sources,
            "run initialized"
        );
    }

    /// See [`start_with`][Self::start_with].
    pub fn start(&mut self) {
        self.start_with(&mut NoopObserver);
    }

    /// Begin or resume stepping.
    ///
    /// From `Idle` this enters `Exploration` (or `Evacuation` directly when
    /// zero rounds are configured).  From a paused `Exploration` or
    /// `Evacuation` it resumes.  Rejected before `initialize` and after the
    /// run has finished.
    pub fn start_with<O: SimObserver>(&mut self, observer: &mut O) {
        if !self.initialized {
            warn!("start ignored: not initialized");
            return;
        }
        match self.phase {
            Phase::Idle => {
                self.running = true;
                if self.config.colony.rounds == 0 {
                    self.enter_evacuation(observer);
                } else {
                    self.transition(Phase::Exploration, observer);
                }
            }
            Phase::Exploration | Phase::Evacuation => {
                self.running = true;
            }
            Phase::Finished => warn!("start ignored: run already finished"),
        }
    }

    /// Pause stepping.  The phase is unchanged.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(phase = %self.phase, "run stopped");
        }
    }

    /// Drop all run state and return to an uninitialized `Idle`.
    pub fn reset(&mut self) {
        self.state = RunState::empty(&self.config, &self.spawn);
        self.phase = Phase::Idle;
        self.initialized = false;
        self.running = false;
        info!("run reset");
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// One round or tick with no observer.  Returns `false` if nothing ran.
    pub fn step(&mut self) -> bool {
        self.step_with(&mut NoopObserver)
    }

    /// Perform exactly one exploration round or one evacuation tick.
    /// No-op (returns `false`) unless running.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if !self.running {
            return false;
        }
        match self.phase {
            Phase::Exploration => self.exploration_round(observer),
            Phase::Evacuation => self.evacuation_tick(observer),
            Phase::Idle | Phase::Finished => return false,
        }
        true
    }

    /// Step until the run finishes or is stopped.  Returns the number of
    /// steps taken.
    pub fn run_to_completion<O: SimObserver>(&mut self, observer: &mut O) -> u64 {
        let mut steps = 0;
        while self.step_with(observer) {
            steps += 1;
        }
        steps
    }

    fn exploration_round<O: SimObserver>(&mut self, observer: &mut O) {
        let state = &mut self.state;
        let record: RoundRecord = self
            .workers
            .run(|| state.colony.run_round(&state.grid, &mut state.trail));
        state.round = record.round;
        observer.on_round_end(&record);
        state.exploration_log.push(record);

        if state.round >= self.config.colony.rounds {
            info!(
                rounds = state.round,
                best_path_length = state.colony.best_path_length().unwrap_or(0),
                "exploration complete"
            );
            self.enter_evacuation(observer);
        }
    }

    fn evacuation_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let state = &mut self.state;
        let config = &self.config;

        state.tick = state.tick.next();
        let tick = state.tick;

        state.hazards.update(tick, &mut state.grid);
        self.workers.run(|| {
            state.population.step(&state.grid, &state.trail, &config.weights, &config.evacuation)
        });
        let interval = config.evacuation.evaporation_interval;
        if interval > 0 && tick.is_multiple_of(interval) {
            state.trail.evaporate();
        }

        let stats = state.population.statistics();
        let record = TickRecord {
            tick,
            evacuated:    stats.evacuated,
            remaining:    stats.remaining,
            hazard_cells: state.grid.hazard_count(),
        };
        observer.on_tick_end(&record);
        state.evacuation_log.push(record);

        if !state.population.has_active() || tick.0 >= config.evacuation.max_ticks {
            self.finish(observer, stats);
        }
    }

    fn enter_evacuation<O: SimObserver>(&mut self, observer: &mut O) {
        self.state.tick = Tick::ZERO;
        self.transition(Phase::Evacuation, observer);
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O, stats: Statistics) {
        self.running = false;
        info!(
            tick = self.state.tick.0,
            evacuated = stats.evacuated,
            casualties = stats.casualties,
            remaining = stats.remaining,
            total = stats.total,
            "run finished"
        );
        self.transition(Phase::Finished, observer);
        observer.on_finished(&stats);
    }

    fn transition<O: SimObserver>(&mut self, to: Phase, observer: &mut O) {
        let from = self.phase;
        self.phase = to;
        info!(%from, %to, "phase change");
        observer.on_phase_change(from, to);
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Outcome metrics.  Before evacuation begins nobody has moved, so every
    /// placed evacuee counts as remaining and the derived figures are zero.
    pub fn current_statistics(&self) -> Statistics {
        match self.phase {
            Phase::Evacuation | Phase::Finished => self.state.population.statistics(),
            Phase::Idle | Phase::Exploration => {
                let total = self.state.population.len();
                Statistics { total, remaining: total, ..Statistics::default() }
            }
        }
    }

    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Manual edits ──────────────────────────────────────────────────────

    /// Toggle a wall.  Only while initialized and not running.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        self.can_edit("toggle_wall") && self.state.grid.toggle_wall(cell)
    }

    /// Start a hazard instance at `cell`.  Only while initialized and not
    /// running.
    pub fn add_hazard(&mut self, cell: Cell) -> bool {
        self.can_edit("add_hazard") && self.state.hazards.ignite_at(cell, &mut self.state.grid)
    }

    /// Add an exit.  Only while initialized and not running.
    pub fn add_exit(&mut self, cell: Cell) -> bool {
        self.can_edit("add_exit") && self.state.grid.add_exit(cell)
    }

    fn can_edit(&self, op: &'static str) -> bool {
        if !self.initialized {
            warn!(op, "edit ignored: not initialized");
            return false;
        }
        if self.running {
            warn!(op, "edit ignored: simulation is running");
            return false;
        }
        true
    }

    // ── Read-only inspection ──────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.state.grid
    }

    pub fn trail(&self) -> &TrailField {
        &self.state.trail
    }

    pub fn hazards(&self) -> &[HazardInstance] {
        self.state.hazards.instances()
    }

    /// Explorers from the latest round.
    pub fn explorers(&self) -> &[Explorer] {
        self.state.colony.explorers()
    }

    pub fn evacuees(&self) -> &[Evacuee] {
        self.state.population.evacuees()
    }

    pub fn exploration_log(&self) -> &[RoundRecord] {
        &self.state.exploration_log
    }

    pub fn evacuation_log(&self) -> &[TickRecord] {
        &self.state.evacuation_log
    }

    /// Last completed evacuation tick; 0 before the first.
    pub fn tick(&self) -> Tick {
        self.state.tick
    }

    /// Exploration rounds completed.
    pub fn round(&self) -> u32 {
        self.state.round
    }
}
