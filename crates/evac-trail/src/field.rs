//! `TrailField`: one `f64` per grid cell, row-major.

use evac_core::Cell;

/// Lower bound of every cell, and the initial value.
pub const TRAIL_FLOOR: f64 = 0.01;

/// Upper bound of every cell after a deposit.
pub const TRAIL_CEILING: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct TrailField {
    size:             usize,
    values:           Vec<f64>,
    evaporation_rate: f64,
}

impl TrailField {
    /// A `size × size` field at [`TRAIL_FLOOR`] everywhere.
    ///
    /// `evaporation_rate` is the fraction removed per [`evaporate`][Self::evaporate]
    /// pass and is clamped to `[0, 1]`.
    pub fn new(size: usize, evaporation_rate: f64) -> Self {
        Self {
            size,
            values: vec![TRAIL_FLOOR; size * size],
            evaporation_rate: evaporation_rate.clamp(0.0, 1.0),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn evaporation_rate(&self) -> f64 {
        self.evaporation_rate
    }

    #[inline]
    fn idx(&self, cell: Cell) -> Option<usize> {
        cell.in_square(self.size)
            .then(|| cell.y as usize * self.size + cell.x as usize)
    }

    /// Trail strength at `cell`; `0.0` outside the field.
    #[inline]
    pub fn get(&self, cell: Cell) -> f64 {
        self.idx(cell).map_or(0.0, |i| self.values[i])
    }

    /// Add `amount`, capped at [`TRAIL_CEILING`].  No-op outside the field.
    pub fn deposit(&mut self, cell: Cell, amount: f64) {
        if let Some(i) = self.idx(cell) {
            self.values[i] = (self.values[i] + amount).min(TRAIL_CEILING);
        }
    }

    /// [`deposit`][Self::deposit] `amount` on every cell of `path`, in order.
    /// A cell visited twice receives two deposits.
    pub fn deposit_path(&mut self, path: &[Cell], amount: f64) {
        for &cell in path {
            self.deposit(cell, amount);
        }
    }

    /// Multiply every cell by `1 - evaporation_rate`, then raise anything
    /// below [`TRAIL_FLOOR`] back to the floor.
    pub fn evaporate(&mut self) {
        let keep = 1.0 - self.evaporation_rate;
        for v in &mut self.values {
            *v = (*v * keep).max(TRAIL_FLOOR);
        }
    }

    /// Mean over all cells.  `0.0` for an empty field.
    pub fn average_value(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Largest cell value.  `0.0` for an empty field.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Row-major view for read-only consumers (heat-map renderers).
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
