//! Ship definitions, placed ships and the fleet that owns them.

use alloc::vec::Vec;
use core::fmt;

use super::board::{Board, Cell};
use super::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Segments run along increasing columns.
    Horizontal,
    /// Segments run along increasing rows.
    Vertical,
}

impl Orientation {
    /// Coordinate of segment `i` of a ship starting at `origin`.
    pub fn step(self, origin: Coord, i: usize) -> Coord {
        let (row, col) = origin;
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }

    /// All `length` coordinates of a ship starting at `origin`, in order.
    pub fn cells(self, origin: Coord, length: usize) -> impl Iterator<Item = Coord> {
        (0..length).map(move |i| self.step(origin, i))
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship that has been put on a board, with the cells it covers.
#[derive(Clone, PartialEq, Eq)]
pub struct PlacedShip {
    def: ShipDef,
    cells: Vec<Coord>,
}

impl PlacedShip {
    pub fn new(def: ShipDef, cells: Vec<Coord>) -> Self {
        Self { def, cells }
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// A ship is sunk once every one of its cells reads `Hit` on `board`.
    pub fn is_sunk(&self, board: &Board) -> bool {
        self.cells
            .iter()
            .all(|&coord| board.get(coord) == Some(Cell::Hit))
    }
}

impl fmt::Debug for PlacedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacedShip {{ name: \"{}\", length: {}, cells: {:?} }}",
            self.def.name(),
            self.def.length(),
            self.cells
        )
    }
}

/// A side's ships, kept in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<PlacedShip>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Record a placed ship.
    pub fn insert(&mut self, def: ShipDef, cells: Vec<Coord>) {
        self.ships.push(PlacedShip::new(def, cells));
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Look a ship up by name.
    pub fn get(&self, name: &str) -> Option<&PlacedShip> {
        self.ships.iter().find(|ship| ship.name() == name)
    }

    /// First ship covering `coord`. Ships never share cells, so the first
    /// match is the only match.
    pub fn ship_at(&self, coord: Coord) -> Option<&PlacedShip> {
        self.ships.iter().find(|ship| ship.contains(coord))
    }

    /// Returns `true` when every cell of every ship is `Hit` on `board`.
    pub fn is_destroyed(&self, board: &Board) -> bool {
        self.ships.iter().all(|ship| ship.is_sunk(board))
    }

    /// Ships still afloat on `board`, in fleet order.
    pub fn afloat<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a PlacedShip> + 'a {
        self.ships.iter().filter(move |ship| !ship.is_sunk(board))
    }
}
