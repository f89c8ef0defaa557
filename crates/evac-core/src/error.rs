//! Base error type.
//!
//! Simulation operations themselves never fail: invalid edits and
//! unsatisfiable placements are no-ops.  Errors are reserved for
//! configuration validation and I/O at the edges.

use thiserror::Error;

/// The error type for `evac-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvacError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `evac-*` crates.
pub type EvacResult<T> = Result<T, EvacError>;
