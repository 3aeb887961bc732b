//! One side's record of the shots it has taken at the opponent.

use alloc::vec;
use alloc::vec::Vec;

use super::common::{Coord, ShotResult};
use super::config::BOARD_SIZE;

/// What a side knows about one opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unknown,
    Hit,
    Miss,
}

/// Hit/miss knowledge about the opponent's grid. Never holds ship positions
/// that were not revealed by a shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingGrid {
    size: usize,
    marks: Vec<Mark>,
}

impl TrackingGrid {
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            marks: vec![Mark::Unknown; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark at `coord`, or `None` when it lies off the grid.
    pub fn get(&self, (row, col): Coord) -> Option<Mark> {
        if row < self.size && col < self.size {
            Some(self.marks[row * self.size + col])
        } else {
            None
        }
    }

    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Mark::Unknown)
    }

    /// Set the mark at `coord`. Off-grid coordinates are ignored.
    pub fn mark(&mut self, (row, col): Coord, mark: Mark) {
        if row < self.size && col < self.size {
            self.marks[row * self.size + col] = mark;
        }
    }

    /// Record the outcome of a shot. `AlreadyFired` is recorded as a miss so
    /// the cell is never offered as a target again.
    pub fn record(&mut self, coord: Coord, result: ShotResult) {
        let mark = if result.is_hit() { Mark::Hit } else { Mark::Miss };
        self.mark(coord, mark);
    }

    /// Coordinates still unknown, row-major.
    pub fn unknown_cells(&self) -> Vec<Coord> {
        let size = self.size;
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Unknown)
            .map(|(i, _)| (i / size, i % size))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

impl Default for TrackingGrid {
    fn default() -> Self {
        Self::new()
    }
}
