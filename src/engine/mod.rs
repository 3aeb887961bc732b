//! Core battleship game engine (no_std compatible)
//!
//! This module contains the pure game logic: boards, fleets, placement,
//! shot resolution and the turn state machine. It needs only `alloc`,
//! `rand` and the `log` facade.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod placement;
pub mod ship;
pub mod tracking;

// Re-export commonly used types
pub use ai::choose_shot;
pub use board::{Board, Cell};
pub use common::{Coord, GameError, PlacementError, ShotResult};
pub use config::*;
pub use game::{GameEngine, GameOutcome, GameStatus, Side, SideState, TurnReport};
pub use placement::{
    place_fleet_guided, place_fleet_randomly, place_ship_randomly, random_placement,
    PlacementRequest, PlacementSource,
};
pub use ship::{Fleet, Orientation, PlacedShip, ShipDef};
pub use tracking::{Mark, TrackingGrid};
