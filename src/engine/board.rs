//! Owner's view of a grid: ship occupancy plus the shots taken against it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::debug;

use super::common::{Coord, GameError, PlacementError, ShotResult};
use super::config::BOARD_SIZE;
use super::ship::{Fleet, Orientation};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Unrevealed water.
    Empty,
    /// Ship segment, visible only to the owner.
    ShipPresent,
    /// Ship segment that has been fired upon.
    Hit,
    /// Water that has been fired upon.
    Miss,
}

impl Cell {
    /// `true` once the cell has taken a shot.
    pub fn is_fired(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Square grid of [`Cell`]s stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty standard-size board.
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Create an empty `size x size` board.
    pub fn with_size(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at `coord`, or `None` when it lies off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.0 * self.size + coord.1])
        } else {
            None
        }
    }

    fn set(&mut self, (row, col): Coord, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Explain why a ship of `length` cannot start at `origin`, if it can't.
    pub fn check_placement(
        &self,
        origin: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let mut overlaps = false;
        for coord in orientation.cells(origin, length) {
            match self.get(coord) {
                None => return Err(PlacementError::OutOfBounds),
                Some(Cell::Empty) => {}
                Some(_) => overlaps = true,
            }
        }
        if overlaps {
            Err(PlacementError::Overlaps)
        } else {
            Ok(())
        }
    }

    /// `true` iff every cell the ship would cover is on the board and empty.
    pub fn can_place(&self, origin: Coord, length: usize, orientation: Orientation) -> bool {
        self.check_placement(origin, length, orientation).is_ok()
    }

    /// Mark the ship's cells `ShipPresent` and return them in order.
    ///
    /// The board is left untouched when the placement is infeasible.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, PlacementError> {
        self.check_placement(origin, length, orientation)?;
        let coords: Vec<Coord> = orientation.cells(origin, length).collect();
        for &coord in &coords {
            self.set(coord, Cell::ShipPresent);
        }
        Ok(coords)
    }

    /// Resolve a shot at `target` against this board and its `fleet`.
    ///
    /// Cells already `Hit` or `Miss` are reported as
    /// [`ShotResult::AlreadyFired`] and left unchanged.
    pub fn fire(&mut self, fleet: &Fleet, target: Coord) -> Result<ShotResult, GameError> {
        let cell = self.get(target).ok_or(GameError::OutOfBounds(target))?;
        let result = match cell {
            Cell::Hit | Cell::Miss => ShotResult::AlreadyFired,
            Cell::Empty => {
                self.set(target, Cell::Miss);
                ShotResult::Miss
            }
            Cell::ShipPresent => {
                self.set(target, Cell::Hit);
                match fleet.ship_at(target) {
                    Some(ship) if ship.is_sunk(self) => ShotResult::Sunk(ship.name()),
                    _ => ShotResult::Hit,
                }
            }
        };
        debug!("shot at {:?} -> {:?}", target, result);
        Ok(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipPresent => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
