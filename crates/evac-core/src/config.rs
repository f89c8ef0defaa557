//! Immutable run configuration.
//!
//! A [`SimConfig`] is built once (from defaults, code, or a config file with
//! the `serde` feature) and handed to the simulation controller, which keeps
//! it for the lifetime of the controller.  Nothing reads tunables from
//! process-wide state.
//!
//! Per-run sizing (crowd size, exit count, hazard sources) is supplied
//! separately as [`RunParams`] at initialization time, because a control
//! surface changes those between runs without touching the model constants.

use crate::{EvacError, EvacResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Which obstacle plan to lay down when a run is initialized.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObstacleLayout {
    /// No interior walls.
    Open,
    /// Two U-shaped rooms, pillars, and a hallway wall with a doorway,
    /// drawn for a 50×50 floor and clipped on smaller grids.
    #[default]
    Office,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Side length N of the square grid.
    pub size: usize,
    pub layout: ObstacleLayout,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: 50, layout: ObstacleLayout::Office }
    }
}

// ── Run sizing ────────────────────────────────────────────────────────────────

/// Inclusive `(min, max)` ranges a control surface clamps user input to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunBounds {
    pub population:     (usize, usize),
    pub exits:          (usize, usize),
    pub hazard_sources: (usize, usize),
}

impl Default for RunBounds {
    fn default() -> Self {
        Self {
            population:     (1, 200),
            exits:          (1, 10),
            hazard_sources: (0, 20),
        }
    }
}

/// Per-run sizing passed to `initialize`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunParams {
    pub population:     usize,
    pub exit_count:     usize,
    pub hazard_sources: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self { population: 50, exit_count: 4, hazard_sources: 2 }
    }
}

impl RunParams {
    /// Clamp every field into `bounds`.  The core never validates these; the
    /// boundary layer is expected to call this before `initialize`.
    pub fn clamped(self, bounds: &RunBounds) -> Self {
        let clamp = |v: usize, (lo, hi): (usize, usize)| v.clamp(lo, hi.max(lo));
        Self {
            population:     clamp(self.population, bounds.population),
            exit_count:     clamp(self.exit_count, bounds.exits),
            hazard_sources: clamp(self.hazard_sources, bounds.hazard_sources),
        }
    }
}

// ── Movement weighting ────────────────────────────────────────────────────────

/// Exponents shared by explorers and evacuees:
///
///   weight = trail^alpha × (1 / (goal_distance + 1))^beta
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchWeights {
    pub alpha: f64,
    pub beta:  f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self { alpha: 1.0, beta: 2.0 }
    }
}

impl SearchWeights {
    /// Trail-following × goal-seeking weight for a cell with trail strength
    /// `trail` at `goal_distance` steps from the nearest exit.
    #[inline]
    pub fn weight(&self, trail: f64, goal_distance: u32) -> f64 {
        let heuristic = 1.0 / (goal_distance as f64 + 1.0);
        trail.powf(self.alpha) * heuristic.powf(self.beta)
    }
}

// ── Exploration ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColonyConfig {
    /// Explorers spawned per round.
    pub explorer_count: usize,
    /// Rounds before the evacuation phase begins.
    pub rounds: u32,
    /// Fraction of trail removed per evaporation pass, in `[0, 1]`.
    pub evaporation_rate: f64,
    /// Deposit per cell = `deposit_reward / path_length`.
    pub deposit_reward: f64,
    /// Single-step moves each explorer may take per round.
    pub move_budget: u32,
    /// Consecutive blocked steps tolerated before an explorer is relocated.
    pub stuck_threshold: u32,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            explorer_count:   100,
            rounds:           50,
            evaporation_rate: 0.1,
            deposit_reward:   100.0,
            move_budget:      100,
            stuck_threshold:  5,
        }
    }
}

// ── Evacuation ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvacuationConfig {
    /// Base of the hazard penalty `base^(range - distance)`.
    pub hazard_penalty_base: f64,
    /// Hazard distance at or beyond which no penalty applies.
    pub hazard_awareness_range: u32,
    pub congestion_penalty: f64,
    /// Manhattan radius within which other active evacuees count as crowding.
    pub congestion_radius: u32,
    pub max_ticks: u64,
    /// Consecutive blocked ticks tolerated before an evacuee is relocated.
    pub stuck_threshold: u32,
    /// Cells kept in each evacuee's recent-path history.
    pub history_len: usize,
    /// Extra trail evaporation every N evacuation ticks.  0 disables it.
    pub evaporation_interval: u64,
}

impl Default for EvacuationConfig {
    fn default() -> Self {
        Self {
            hazard_penalty_base:    0.1,
            hazard_awareness_range: 5,
            congestion_penalty:     0.7,
            congestion_radius:      2,
            max_ticks:              1000,
            stuck_threshold:        10,
            history_len:            10,
            evaporation_interval:   5,
        }
    }
}

// ── Hazard ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardConfig {
    /// First evacuation tick at which the initial sources ignite.
    pub ignition_delay: u64,
    /// Per-neighbour ignition probability per unit of intensity.
    pub spread_rate: f64,
    pub max_intensity: u8,
    /// Intensity grows by one every `growth_period` ticks of age.
    pub growth_period: u32,
    /// An ignition site must be strictly farther than this from every exit.
    pub min_exit_clearance: u32,
    /// Candidate cells tried per source before that source is skipped.
    pub placement_attempts: u32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            ignition_delay:     15,
            spread_rate:        0.15,
            max_intensity:      3,
            growth_period:      10,
            min_exit_clearance: 10,
            placement_attempts: 50,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub grid:       GridConfig,
    pub bounds:     RunBounds,
    pub weights:    SearchWeights,
    pub colony:     ColonyConfig,
    pub evacuation: EvacuationConfig,
    pub hazard:     HazardConfig,

    /// Master RNG seed.  The same seed and the same sequence of control calls
    /// always produce identical results.
    pub seed: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid:        GridConfig::default(),
            bounds:      RunBounds::default(),
            weights:     SearchWeights::default(),
            colony:      ColonyConfig::default(),
            evacuation:  EvacuationConfig::default(),
            hazard:      HazardConfig::default(),
            seed:        42,
            num_threads: None,
        }
    }
}

impl SimConfig {
    /// Reject values the models cannot work with.
    pub fn validate(&self) -> EvacResult<()> {
        if self.grid.size == 0 {
            return Err(config_err("grid.size must be at least 1"));
        }
        if self.grid.size > i32::MAX as usize {
            return Err(config_err("grid.size does not fit a cell coordinate"));
        }
        if !self.weights.alpha.is_finite() || !self.weights.beta.is_finite() {
            return Err(config_err("weights.alpha and weights.beta must be finite"));
        }
        if !(0.0..=1.0).contains(&self.colony.evaporation_rate) {
            return Err(config_err(format!(
                "colony.evaporation_rate {} is outside [0, 1]",
                self.colony.evaporation_rate
            )));
        }
        if self.colony.deposit_reward.is_nan() || self.colony.deposit_reward < 0.0 {
            return Err(config_err("colony.deposit_reward must be non-negative"));
        }
        if self.evacuation.hazard_penalty_base.is_nan() || self.evacuation.hazard_penalty_base <= 0.0 {
            return Err(config_err("evacuation.hazard_penalty_base must be positive"));
        }
        if self.evacuation.congestion_penalty.is_nan() || self.evacuation.congestion_penalty < 0.0 {
            return Err(config_err("evacuation.congestion_penalty must be non-negative"));
        }
        for (name, radius) in [
            ("congestion_radius", self.evacuation.congestion_radius),
            ("hazard_awareness_range", self.evacuation.hazard_awareness_range),
        ] {
            if radius as usize > self.grid.size {
                return Err(config_err(format!(
                    "evacuation.{name} {radius} exceeds grid.size {}",
                    self.grid.size
                )));
            }
        }
        if self.hazard.spread_rate.is_nan() || self.hazard.spread_rate < 0.0 {
            return Err(config_err("hazard.spread_rate must be non-negative"));
        }
        if self.hazard.growth_period == 0 {
            return Err(config_err("hazard.growth_period must be at least 1"));
        }
        if self.hazard.max_intensity == 0 {
            return Err(config_err("hazard.max_intensity must be at least 1"));
        }
        for (name, (lo, hi)) in [
            ("population", self.bounds.population),
            ("exits", self.bounds.exits),
            ("hazard_sources", self.bounds.hazard_sources),
        ] {
            if lo > hi {
                return Err(config_err(format!("bounds.{name}: min {lo} exceeds max {hi}")));
            }
        }
        Ok(())
    }
}

fn config_err(msg: impl Into<String>) -> EvacError {
    EvacError::Config(msg.into())
}
