use evac_core::{Cell, HazardId};

/// A single burning cell.
///
/// Intensity starts at 1 and rises by one every `growth_period` ticks of age,
/// up to a cap.  It never falls.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardInstance {
    pub id:        HazardId,
    pub cell:      Cell,
    pub intensity: u8,
    /// Updates survived since ignition.
    pub age:       u32,
}

impl HazardInstance {
    pub fn new(id: HazardId, cell: Cell) -> Self {
        Self { id, cell, intensity: 1, age: 0 }
    }

    /// Advance one tick of age and grow if the age hits a multiple of
    /// `growth_period`.
    pub fn update(&mut self, growth_period: u32, max_intensity: u8) {
        self.age = self.age.saturating_add(1);
        if growth_period > 0 && self.age % growth_period == 0 && self.intensity < max_intensity {
            self.intensity += 1;
        }
    }

    /// Per-neighbour ignition probability for this tick.  Not normalised;
    /// values above 1 simply mean "always".
    #[inline]
    pub fn spread_probability(&self, spread_rate: f64) -> f64 {
        spread_rate * self.intensity as f64
    }
}
