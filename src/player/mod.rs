//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: computer opponent, random placement and uniform random targeting
//! - CliPlayer: interactive command-line player
//! - GameRunner: turn loop driving a GameEngine with two players

use crate::engine::{
    board::Board,
    common::{Coord, GameError, ShotResult},
    game::GameOutcome,
    ship::Fleet,
    tracking::TrackingGrid,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on the board
/// - Selecting targets to attack
/// - Handling feedback from shots
pub trait Player {
    /// Place all ships onto the provided empty board and return the fleet.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Fleet, GameError>;

    /// Choose the next target given what this side knows about the opponent.
    /// `Ok(None)` means there is nothing left to fire at.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        tracking: &TrackingGrid,
    ) -> Result<Option<Coord>, GameError>;

    /// Show this side its own board next to its tracking grid.
    fn show_boards(&mut self, _board: &Board, _tracking: &TrackingGrid) {}

    /// The engine refused `target`; another one will be requested.
    fn target_rejected(&mut self, _target: Coord, _err: &GameError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coord, _result: ShotResult) {}

    /// The game reached a terminal state.
    fn handle_game_over(&mut self, _outcome: &GameOutcome, _board: &Board, _tracking: &TrackingGrid) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod runner;
pub use runner::{setup_side, GameRunner};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{CliPlayer, PlacementMode};
