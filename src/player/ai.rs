use crate::engine::{
    ai,
    board::Board,
    common::{Coord, GameError},
    config::SHIPS,
    placement,
    ship::Fleet,
    tracking::TrackingGrid,
};
use rand::rngs::SmallRng;

use super::Player;

/// Computer opponent: random fleet, uniform random targeting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Fleet, GameError> {
        placement::place_fleet_randomly(board, &SHIPS, rng)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        tracking: &TrackingGrid,
    ) -> Result<Option<Coord>, GameError> {
        Ok(ai::choose_shot(tracking, rng))
    }
}
