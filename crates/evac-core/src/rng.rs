//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = stream_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Because no two agents share a stream, the order in which agent decisions
//! are computed (sequentially or on a Rayon pool) does not affect results.
//!
//! Run-level randomness (layout, hazard ignition and spread, per-round
//! explorer seeds) comes from [`SimRng`] streams derived from the configured
//! seed with [`SimRng::child`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Weighted choice ───────────────────────────────────────────────────────────

/// Pick an index with probability proportional to `weights[i]`.
///
/// Cumulative-distribution draw: weights are normalised to sum to 1, a
/// uniform value in `[0, 1)` is drawn, and the first index whose cumulative
/// weight reaches the draw is returned.  The last index is returned if
/// floating-point rounding leaves the cumulative sum just short of the draw.
///
/// If the total weight is not strictly positive (or not finite) the choice is
/// uniform.  Returns `None` only for an empty slice.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Some(rng.gen_range(0..weights.len()));
    }

    let draw: f64 = rng.r#gen();
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w / total;
        if draw <= cumulative {
            return Some(i);
        }
    }
    Some(weights.len() - 1)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Evacuees own one for the whole run; explorers get a fresh one every round.
/// Stored in a `Vec<AgentRng>` alongside (not inside) the agent state so the
/// decision phase can borrow agents immutably and RNGs mutably at once.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a stream seed and an agent ID.
    pub fn new(stream_seed: u64, agent: AgentId) -> Self {
        let seed = stream_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// See [`weighted_index`].
    #[inline]
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        weighted_index(&mut self.0, weights)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for run-wide operations.
///
/// Used only in single-threaded contexts.  If a component needs its own
/// stream, derive one with [`child`][Self::child].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to give
    /// each component of a run its own independent stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
