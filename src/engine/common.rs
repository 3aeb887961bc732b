//! Common types for Battleship: coordinates, shot results and game errors.

use alloc::string::String;
use core::fmt;

use super::game::Side;

/// Grid coordinate as `(row, col)`, both zero-based.
pub type Coord = (usize, usize);

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot struck a ship segment that was not yet hit.
    Hit,
    /// Shot struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
    /// Shot landed in open water.
    Miss,
    /// Cell had already been fired upon; nothing changed.
    AlreadyFired,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk(_))
    }

    /// Name of the ship this shot sank, if any.
    pub fn sunk(&self) -> Option<&'static str> {
        match *self {
            ShotResult::Sunk(name) => Some(name),
            _ => None,
        }
    }
}

/// Why a ship cannot go where it was asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one segment would fall outside the grid.
    OutOfBounds,
    /// At least one segment would land on a cell that is not empty.
    Overlaps,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would extend past the edge of the board"),
            PlacementError::Overlaps => write!(f, "ship would overlap another ship"),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Raw input could not be read as a coordinate or orientation.
    InvalidInputFormat(String),
    /// Requested placement overlaps or leaves the board.
    InvalidPlacement(PlacementError),
    /// The player targeted a cell it has already fired at.
    RepeatShot(Coord),
    /// Random search found no legal spot for the named ship.
    PlacementExhausted(&'static str),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// It is the other side's turn.
    OutOfTurn(Side),
    /// The game already reached a terminal state.
    GameOver,
    /// The input source has no more input to give.
    InputClosed,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidInputFormat(msg) => write!(f, "Invalid input: {}", msg),
            GameError::InvalidPlacement(reason) => write!(f, "Cannot place ship: {}", reason),
            GameError::RepeatShot((r, c)) => {
                write!(f, "Already fired at row {}, column {}", r, c)
            }
            GameError::PlacementExhausted(name) => {
                write!(f, "Unable to find a legal position for the {}", name)
            }
            GameError::OutOfBounds((r, c)) => {
                write!(f, "Coordinate (row {}, column {}) is off the board", r, c)
            }
            GameError::OutOfTurn(side) => write!(f, "It is not the {:?}'s turn", side),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
