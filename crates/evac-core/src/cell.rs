//! Integer grid coordinates and 4-neighbourhood helpers.

use std::fmt;

/// Neighbour offsets in query order: south, north, east, west (`+y`, `-y`,
/// `+x`, `-x`).  Every neighbour list in the workspace follows this order,
/// which keeps weighted draws reproducible for a fixed seed.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A cell coordinate `(x, y)`.
///
/// Signed so that neighbour arithmetic at the grid edge produces an
/// out-of-bounds cell instead of wrapping; bounds are checked by the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours, unchecked against any grid bounds.
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }

    /// `true` if `0 <= x, y < size`.
    #[inline]
    pub fn in_square(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
