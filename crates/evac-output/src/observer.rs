//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use evac_sim::{RoundRecord, SimObserver, Statistics, TickRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams round and tick records to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].  The writer is finished when the run
/// reaches `Finished`; call [`finish`][Self::finish] yourself for runs that
/// are stopped early.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer now.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, record: &RoundRecord) {
        let result = self.writer.write_round(&record.into());
        self.store_err(result);
    }

    fn on_tick_end(&mut self, record: &TickRecord) {
        let result = self.writer.write_tick(&record.into());
        self.store_err(result);
    }

    fn on_finished(&mut self, _stats: &Statistics) {
        self.finish();
    }
}
