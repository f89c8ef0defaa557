//! `evac-sim`: the simulation controller.
//!
//! # Phase machine
//!
//! ```text
//!            initialize        start          rounds done        no one active
//!   (any) ─────────────▶ Idle ──────▶ Exploration ─────────▶ Evacuation ─────────▶ Finished
//!                                                                  or max_ticks
//! ```
//!
//! `stop` pauses stepping without changing the phase; `start` resumes.
//! `reset` returns to an uninitialized `Idle` and drops all run state.
//!
//! # One step
//!
//! ```text
//! Exploration:  ExplorerColony::run_round → RoundRecord → exploration log
//! Evacuation:   tick += 1
//!               ① HazardModel::update          (ignite once, grow, spread)
//!               ② EvacueePopulation::step      (decide in parallel, apply in id order)
//!               ③ trail evaporation every `evaporation_interval` ticks
//!               ④ TickRecord → evacuation log; finish check
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Explorer walks and evacuee decisions run on Rayon's pool.  |
//! | `fx-hash`  | FxHash for the per-tick occupancy index.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_core::{RunParams, SimConfig};
//! use evac_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.initialize(RunParams::default());
//! sim.start();
//! sim.run_to_completion(&mut NoopObserver);
//! println!("{:?}", sim.current_statistics());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod phase;
pub mod record;
pub mod sim;
mod state;
mod workers;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use phase::Phase;
pub use record::{RoundRecord, TickRecord};
pub use sim::Simulation;

pub use evac_colony::ExplorerSpawn;
pub use evac_crowd::Statistics;
