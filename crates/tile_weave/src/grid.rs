//! Square row-major grid of category labels with toroidal addressing.
//!
//! The grid is produced once by the map builder and then mutated cell by cell
//! from the outside (collection empties a cell); it never regenerates itself.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Label;

/// A `side` x `side` arrangement of category labels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileGrid {
    side: usize,
    cells: Vec<Label>,
}

impl TileGrid {
    /// Build a grid from a flat row-major cell vector of length `side * side`.
    pub fn from_cells(side: usize, cells: Vec<Label>) -> Self {
        debug_assert_eq!(cells.len(), side * side, "cell count must be side^2");
        Self { side, cells }
    }

    /// Side length of the square grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Label at `(x, y)`; both coordinates must be within `0..side`.
    pub fn get(&self, x: usize, y: usize) -> &Label {
        &self.cells[self.index(x, y)]
    }

    /// Replace the label at `(x, y)`, returning the previous one.
    pub fn replace(&mut self, x: usize, y: usize, label: impl Into<Label>) -> Label {
        let idx = self.index(x, y);
        std::mem::replace(&mut self.cells[idx], label.into())
    }

    /// Label at `(x, y)` with toroidal wrap-around for out-of-range (and
    /// negative) coordinates.
    pub fn get_wrapped(&self, x: isize, y: isize) -> &Label {
        let side = self.side as isize;
        let wx = x.rem_euclid(side) as usize;
        let wy = y.rem_euclid(side) as usize;
        self.get(wx, wy)
    }

    /// Rows of the grid, in row-major order.
    pub fn rows(&self) -> impl Iterator<Item = &[Label]> {
        self.cells.chunks(self.side)
    }

    /// Copy of the grid as nested row vectors, the shape embedded in state
    /// snapshots.
    pub fn to_rows(&self) -> Vec<Vec<Label>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Square window of `2 * radius + 1` rows around `(center_x, center_y)`,
    /// wrapping toroidally at the edges.
    pub fn view(&self, center_x: usize, center_y: usize, radius: usize) -> Vec<Vec<Label>> {
        let r = radius as isize;
        let cx = center_x as isize;
        let cy = center_y as isize;

        (-r..=r)
            .map(|dy| {
                (-r..=r)
                    .map(|dx| self.get_wrapped(cx + dx, cy + dy).clone())
                    .collect()
            })
            .collect()
    }

    /// Count of cells carrying `label`.
    pub fn count_of(&self, label: &str) -> usize {
        self.cells.iter().filter(|c| c.as_str() == label).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.side && y < self.side, "coordinates out of range");
        y * self.side + x
    }
}
