//! `evac-hazard`: growing, spreading hazard sources.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`instance`] | `HazardInstance` - one burning cell: intensity and age     |
//! | [`model`]    | `HazardModel` - delayed ignition, growth, one-hop spread   |
//!
//! # Lifecycle
//!
//! 1. `HazardModel::new` records how many sources to ignite.  Nothing burns.
//! 2. The first `update` whose tick reaches `ignition_delay` places the
//!    sources (best effort, away from exits).  This happens once per run.
//! 3. Every `update` ages all instances, then runs one spread pass.  Cells
//!    ignited by a pass are applied after the pass, so fire advances at most
//!    one cell per tick.
//!
//! Instances are never removed; the hazard set only grows until the owning
//! run state is rebuilt.

pub mod instance;
pub mod model;

#[cfg(test)]
mod tests;

pub use instance::HazardInstance;
pub use model::HazardModel;
