//! The `OutputWriter` trait implemented by log backends.

use crate::{ConvergenceRow, EvacuationRow, OutputResult};

/// Sink for the two run-log tables.
///
/// Errors surface to the observer, which stores the first one; see
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one exploration round.
    fn write_round(&mut self, row: &ConvergenceRow) -> OutputResult<()>;

    /// Write one evacuation tick.
    fn write_tick(&mut self, row: &EvacuationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
