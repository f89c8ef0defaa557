//! `evac-grid`: the spatial grid every other component reads.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`grid`]   | `SpatialGrid`: walls, exits, hazard cells, neighbour and distance queries |
//! | [`layout`] | Office obstacle plan, perimeter exit distribution          |
//!
//! Movement is 4-directional; every distance is Manhattan.

pub mod grid;
pub mod layout;


pub use grid::{NO_HAZARD_DISTANCE, Neighbors, RANDOM_CELL_ATTEMPTS, SpatialGrid};
pub use layout::{distribute_evenly, office_walls, perimeter_cells};
