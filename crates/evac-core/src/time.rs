//! Discrete simulation time.
//!
//! The evacuation phase advances in integer ticks; the exploration phase
//! counts rounds with a plain `u32`.  Neither maps to wall-clock time.

use std::fmt;

/// An evacuation-phase tick counter.  Tick 0 is "before the first tick";
/// the first processed tick is `Tick(1)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// `true` if this tick falls on a multiple of `period`.  A zero period
    /// never matches a non-zero tick.
    #[inline]
    pub fn is_multiple_of(self, period: u64) -> bool {
        self.0.is_multiple_of(period)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
