//! Turn-by-turn state machine for a human-vs-computer game.
//!
//! The human moves first and keeps the turn after every hit; the computer
//! always hands the turn back after its single shot, hit or miss.

use log::{debug, info, warn};

use super::board::Board;
use super::common::{Coord, GameError, ShotResult};
use super::ship::Fleet;
use super::tracking::{Mark, TrackingGrid};

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
    /// The side to move ran out of cells to target without a winner.
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWon | GameStatus::ComputerWon | GameStatus::Draw
        )
    }

    /// Side whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            GameStatus::PlayerTurn => Some(Side::Player),
            GameStatus::ComputerTurn => Some(Side::Computer),
            _ => None,
        }
    }

    /// Winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::PlayerWon => Some(Side::Player),
            GameStatus::ComputerWon => Some(Side::Computer),
            _ => None,
        }
    }
}

/// Everything one side owns: its board and fleet plus what it has learned
/// about the opponent.
#[derive(Debug, Clone)]
pub struct SideState {
    board: Board,
    fleet: Fleet,
    tracking: TrackingGrid,
    shots: usize,
}

impl SideState {
    /// Wrap a board and the fleet placed on it. The tracking grid starts
    /// all unknown and matches the board's size.
    pub fn new(board: Board, fleet: Fleet) -> Self {
        let tracking = TrackingGrid::with_size(board.size());
        Self {
            board,
            fleet,
            tracking,
            shots: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }

    /// Shots this side has landed on a fresh cell.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// `true` once every ship of this side is sunk.
    pub fn is_destroyed(&self) -> bool {
        self.fleet.is_destroyed(&self.board)
    }
}

/// What happened during one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coord,
    pub result: ShotResult,
    /// Status after the shot was applied.
    pub status: GameStatus,
}

/// Final summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameOutcome {
    pub status: GameStatus,
    pub player_shots: usize,
    pub computer_shots: usize,
}

/// Core game logic holding both sides and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameEngine {
    player: SideState,
    computer: SideState,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game with both fleets already placed. The player moves first.
    pub fn new(player: SideState, computer: SideState) -> Self {
        Self {
            player,
            computer,
            status: GameStatus::PlayerTurn,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player(&self) -> &SideState {
        &self.player
    }

    pub fn computer(&self) -> &SideState {
        &self.computer
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        match self.status.to_move() {
            None => Err(GameError::GameOver),
            Some(s) if s == side => Ok(()),
            Some(_) => Err(GameError::OutOfTurn(side)),
        }
    }

    /// Fire the player's shot at the computer's board.
    ///
    /// Targets the player has already fired at are refused with
    /// [`GameError::RepeatShot`] before they reach the board.
    pub fn player_shot(&mut self, target: Coord) -> Result<TurnReport, GameError> {
        self.expect_turn(Side::Player)?;
        match self.player.tracking.get(target) {
            None => return Err(GameError::OutOfBounds(target)),
            Some(Mark::Unknown) => {}
            Some(_) => return Err(GameError::RepeatShot(target)),
        }

        let result = self.computer.board.fire(&self.computer.fleet, target)?;
        match result {
            ShotResult::AlreadyFired => {
                warn!("player shot at {:?} landed on a cell already fired upon", target);
            }
            ShotResult::Hit | ShotResult::Sunk(_) => {
                self.player.tracking.record(target, result);
                self.player.shots += 1;
                if self.computer.is_destroyed() {
                    info!("player sank the last computer ship after {} shots", self.player.shots);
                    self.status = GameStatus::PlayerWon;
                }
            }
            ShotResult::Miss => {
                self.player.tracking.record(target, result);
                self.player.shots += 1;
                self.status = GameStatus::ComputerTurn;
            }
        }
        debug!("player -> {:?}: {:?}, now {:?}", target, result, self.status);
        Ok(self.report(Side::Player, target, result))
    }

    /// Fire the computer's shot at the player's board. The turn always
    /// passes back to the player unless this shot wins the game.
    pub fn computer_shot(&mut self, target: Coord) -> Result<TurnReport, GameError> {
        self.expect_turn(Side::Computer)?;

        let result = self.player.board.fire(&self.player.fleet, target)?;
        match result {
            ShotResult::AlreadyFired => {
                warn!("computer re-targeted {:?}; skipping its turn", target);
                self.computer.tracking.mark(target, Mark::Miss);
                self.status = GameStatus::PlayerTurn;
            }
            ShotResult::Hit | ShotResult::Sunk(_) | ShotResult::Miss => {
                self.computer.tracking.record(target, result);
                self.computer.shots += 1;
                self.status = if result.is_hit() && self.player.is_destroyed() {
                    info!("computer sank the last player ship after {} shots", self.computer.shots);
                    GameStatus::ComputerWon
                } else {
                    GameStatus::PlayerTurn
                };
            }
        }
        debug!("computer -> {:?}: {:?}, now {:?}", target, result, self.status);
        Ok(self.report(Side::Computer, target, result))
    }

    /// End the game without a winner because the side to move has nothing
    /// left to target.
    pub fn declare_draw(&mut self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        warn!("{:?} has no cells left to target; game drawn", self.status.to_move());
        self.status = GameStatus::Draw;
        Ok(())
    }

    /// Summary of the finished game, or `None` while it is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.status.is_over() {
            return None;
        }
        Some(GameOutcome {
            status: self.status,
            player_shots: self.player.shots,
            computer_shots: self.computer.shots,
        })
    }

    fn report(&self, side: Side, target: Coord, result: ShotResult) -> TurnReport {
        TurnReport {
            side,
            target,
            result,
            status: self.status,
        }
    }
}
