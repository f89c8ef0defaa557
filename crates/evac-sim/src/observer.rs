//! Observer hooks for progress reporting and run logging.

use evac_crowd::Statistics;

use crate::{Phase, RoundRecord, TickRecord};

/// Callbacks invoked by [`Simulation`][crate::Simulation] as it steps.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers cannot fail the run; one that
/// does I/O should hold on to its first error and report it afterwards.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, r: &TickRecord) {
///         if r.tick.is_multiple_of(50) {
///             println!("{}: {} out, {} inside", r.tick, r.evacuated, r.remaining);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called on every phase transition made by `start_with` or a step.
    fn on_phase_change(&mut self, _from: Phase, _to: Phase) {}

    /// Called after each exploration round.
    fn on_round_end(&mut self, _record: &RoundRecord) {}

    /// Called after each evacuation tick.
    fn on_tick_end(&mut self, _record: &TickRecord) {}

    /// Called once when the run reaches [`Phase::Finished`].
    fn on_finished(&mut self, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
