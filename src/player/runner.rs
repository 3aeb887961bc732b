use alloc::boxed::Box;
use log::{info, warn};
use rand::rngs::SmallRng;

use crate::{
    engine::{
        board::Board,
        common::GameError,
        config::MAX_SETUP_RETRIES,
        game::{GameEngine, GameOutcome, GameStatus, SideState, TurnReport},
    },
    player::Player,
};

/// Have `player` place a fleet on a fresh board.
///
/// `PlacementExhausted` restarts the whole setup on a new board, up to
/// [`MAX_SETUP_RETRIES`] extra attempts; the last error is returned after that.
pub fn setup_side(player: &mut dyn Player, rng: &mut SmallRng) -> Result<SideState, GameError> {
    let mut attempt = 0;
    loop {
        let mut board = Board::new();
        match player.place_ships(rng, &mut board) {
            Ok(fleet) => return Ok(SideState::new(board, fleet)),
            Err(GameError::PlacementExhausted(name)) if attempt < MAX_SETUP_RETRIES => {
                attempt += 1;
                warn!(
                    "could not place the {}; restarting setup (attempt {}/{})",
                    name, attempt, MAX_SETUP_RETRIES
                );
            }
            Err(e) => return Err(e),
        }
    }
}

/// Drives a [`GameEngine`], asking each player for targets in turn.
pub struct GameRunner {
    engine: GameEngine,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
}

impl GameRunner {
    pub fn new(engine: GameEngine, human: Box<dyn Player>, computer: Box<dyn Player>) -> Self {
        Self {
            engine,
            human,
            computer,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play one shot for whichever side is to move.
    ///
    /// Returns `Ok(None)` when no shot was applied: the human's target was
    /// refused and will be asked for again, or the side to move had nothing
    /// left to target and the game was drawn.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<Option<TurnReport>, GameError> {
        match self.engine.status() {
            GameStatus::PlayerTurn => {
                let side = self.engine.player();
                self.human.show_boards(side.board(), side.tracking());
                let target = match self.human.select_target(rng, side.tracking())? {
                    Some(target) => target,
                    None => {
                        self.engine.declare_draw()?;
                        return Ok(None);
                    }
                };
                match self.engine.player_shot(target) {
                    Ok(report) => {
                        self.human.handle_shot_result(target, report.result);
                        self.computer.handle_opponent_shot(target, report.result);
                        Ok(Some(report))
                    }
                    Err(err @ (GameError::RepeatShot(_) | GameError::OutOfBounds(_))) => {
                        warn!("player target refused: {}", err);
                        self.human.target_rejected(target, &err);
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
            GameStatus::ComputerTurn => {
                let tracking = self.engine.computer().tracking();
                let target = match self.computer.select_target(rng, tracking)? {
                    Some(target) => target,
                    None => {
                        self.engine.declare_draw()?;
                        return Ok(None);
                    }
                };
                let report = self.engine.computer_shot(target)?;
                self.computer.handle_shot_result(target, report.result);
                self.human.handle_opponent_shot(target, report.result);
                Ok(Some(report))
            }
            _ => Err(GameError::GameOver),
        }
    }

    /// Play until the game is over and report the outcome to both players.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameOutcome, GameError> {
        info!("battle begins");
        let outcome = loop {
            if let Some(outcome) = self.engine.outcome() {
                break outcome;
            }
            self.step(rng)?;
        };
        info!(
            "game over: {:?} (player shots {}, computer shots {})",
            outcome.status, outcome.player_shots, outcome.computer_shots
        );
        let player = self.engine.player();
        self.human
            .handle_game_over(&outcome, player.board(), player.tracking());
        let computer = self.engine.computer();
        self.computer
            .handle_game_over(&outcome, computer.board(), computer.tracking());
        Ok(outcome)
    }
}
