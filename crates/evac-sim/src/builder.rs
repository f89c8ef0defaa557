//! Fluent builder for constructing a [`Simulation`].

use evac_colony::ExplorerSpawn;
use evac_core::SimConfig;

use crate::sim::Simulation;
use crate::state::RunState;
use crate::workers::Workers;
use crate::SimResult;

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                  |
/// |--------------------------|--------------------------|
/// | `.explorer_spawn(s)`     | `ExplorerSpawn::Random`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .explorer_spawn(ExplorerSpawn::At(vec![Cell::new(0, 0)]))
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    spawn:  ExplorerSpawn,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, spawn: ExplorerSpawn::Random }
    }

    /// Pin explorer start cells instead of drawing them at random.
    pub fn explorer_spawn(mut self, spawn: ExplorerSpawn) -> Self {
        self.spawn = spawn;
        self
    }

    /// Validate the configuration and return an uninitialized controller.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        let workers = Workers::new(self.config.num_threads)?;
        let state = RunState::empty(&self.config, &self.spawn);
        Ok(Simulation::from_parts(self.config, self.spawn, state, workers))
    }
}
