//! Obstacle plans and perimeter exit placement.

use tracing::debug;

use evac_core::{Cell, ObstacleLayout};

use crate::SpatialGrid;

/// Wall cells of the office plan, drawn for a 50×50 floor.
///
/// Two U-shaped rooms open towards the centre (rows 10 and 18, closed at
/// x = 10 and x = 39), ten 1×2 pillars, and a hallway wall on row 30 with
/// a ten-cell doorway at x = 20..30.
pub fn office_walls() -> Vec<Cell> {
    let mut walls = Vec::new();

    for x in (10..20).chain(30..40) {
        walls.push(Cell::new(x, 10));
        walls.push(Cell::new(x, 18));
    }
    for y in 10..19 {
        walls.push(Cell::new(10, y));
        walls.push(Cell::new(39, y));
    }

    walls.extend(
        [(15, 25), (15, 26), (25, 25), (25, 26), (35, 25), (35, 26), (20, 35), (20, 36), (30, 35), (30, 36)]
            .map(Cell::from),
    );

    walls.extend((10..40).filter(|x| !(20..30).contains(x)).map(|x| Cell::new(x, 30)));
    walls
}

/// Perimeter cells in placement order: top edge left-to-right, bottom edge
/// left-to-right, left edge top-to-bottom, right edge top-to-bottom (the
/// side edges exclude the corners, which the top and bottom edges cover).
pub fn perimeter_cells(size: usize) -> Vec<Cell> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![Cell::new(0, 0)];
    }
    let last = size as i32 - 1;
    let mut cells = Vec::with_capacity(4 * size - 4);
    cells.extend((0..=last).map(|x| Cell::new(x, 0)));
    cells.extend((0..=last).map(|x| Cell::new(x, last)));
    cells.extend((1..last).map(|y| Cell::new(0, y)));
    cells.extend((1..last).map(|y| Cell::new(last, y)));
    cells
}

/// `count` perimeter cells spaced by `perimeter_len / count`.  Asking for at
/// least as many cells as the perimeter holds returns the whole perimeter.
pub fn distribute_evenly(count: usize, size: usize) -> Vec<Cell> {
    let edges = perimeter_cells(size);
    if count == 0 || edges.is_empty() {
        return Vec::new();
    }
    if count >= edges.len() {
        return edges;
    }
    let stride = edges.len() / count;
    (0..count).map(|i| edges[i * stride]).collect()
}

impl SpatialGrid {
    /// Replace all walls with the cells of `layout` that fit on this grid.
    pub fn apply_layout(&mut self, layout: ObstacleLayout) {
        self.clear_walls();
        if layout == ObstacleLayout::Office {
            let placed = office_walls().into_iter().filter(|&c| self.set_wall(c)).count();
            debug!(placed, size = self.size(), "office layout applied");
        }
    }

    /// Replace all exits with `count` evenly spaced perimeter cells, skipping
    /// walls, then top up from the four corners if fewer than `count` were
    /// placed.
    pub fn initialize_exits(&mut self, count: usize) {
        self.clear_exits();
        for cell in distribute_evenly(count, self.size()) {
            self.add_exit(cell);
        }
        let last = self.size() as i32 - 1;
        let corners = [Cell::new(0, 0), Cell::new(last, 0), Cell::new(0, last), Cell::new(last, last)];
        for corner in corners {
            if self.exits().len() >= count {
                break;
            }
            self.add_exit(corner);
        }
        if self.exits().len() < count {
            debug!(requested = count, placed = self.exits().len(), "fewer exits placed than requested");
        }
    }
}
