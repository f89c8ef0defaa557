//! `evac-trail`: the trail-strength field explorers write and every agent
//! reads.
//!
//! Values live in `[TRAIL_FLOOR, TRAIL_CEILING]`.  The floor is strictly
//! positive so a weighted draw over neighbours always has non-zero weight.
//! The only writes are [`TrailField::deposit`], [`TrailField::deposit_path`]
//! and [`TrailField::evaporate`].

pub mod field;

#[cfg(test)]
mod tests;

pub use field::{TRAIL_CEILING, TRAIL_FLOOR, TrailField};
