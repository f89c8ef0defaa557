//! `evac-crowd`: the evacuating population.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`evacuee`]    | `Evacuee`, `EvacueeStatus`                                |
//! | [`occupancy`]  | `OccupancyIndex` - active evacuees per cell, built per tick |
//! | [`score`]      | Hazard penalty, congestion factor, combined move score    |
//! | [`population`] | `EvacueePopulation` - placement and the per-tick step     |
//! | [`stats`]      | `Statistics` - aggregate outcome metrics                  |
//!
//! # Tick structure
//!
//! 1. **Snapshot**: build the occupancy index from start-of-tick positions.
//! 2. **Decide** (parallel with the `parallel` feature): each active evacuee
//!    reads the grid, trail, and snapshot and produces a [`population::Decision`].
//!    Decisions never see another evacuee's move from the same tick.
//! 3. **Apply** (sequential, ascending id): status changes, moves, and
//!    relocations are written back.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.            |
//! | `fx-hash`  | FxHash instead of SipHash for the occupancy index.       |

pub mod evacuee;
pub mod occupancy;
pub mod population;
pub mod score;
pub mod stats;


pub use evacuee::{Evacuee, EvacueeStatus};
pub use occupancy::OccupancyIndex;
pub use population::{Decision, EvacueePopulation, decide};
pub use score::{congestion_factor, hazard_penalty, move_score};
pub use stats::Statistics;
