//! `evac-core`: foundational types for the evacuation simulator.
//!
//! This crate is a dependency of every other `evac-*` crate.  It has no
//! `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `HazardId`                                     |
//! | [`cell`]   | `Cell`, 4-neighbourhood offsets, Manhattan distance       |
//! | [`time`]   | `Tick`                                                    |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (run-level), `weighted_index` |
//! | [`config`] | `SimConfig` and its sub-configs, `RunParams`, `RunBounds` |
//! | [`error`]  | `EvacError`, `EvacResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use config::{
    ColonyConfig, EvacuationConfig, GridConfig, HazardConfig, ObstacleLayout, RunBounds,
    RunParams, SearchWeights, SimConfig,
};
pub use error::{EvacError, EvacResult};
pub use ids::{AgentId, HazardId};
pub use rng::{AgentRng, SimRng, weighted_index};
pub use time::Tick;
