//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_shot, AiPlayer, Board, Fleet, GameEngine, GameError, GameStatus, Orientation, Player,
    ShotResult, SideState, TrackingGrid,
};

#[cfg(feature = "std")]
pub use crate::{cli::render_boards, init_logging, CliPlayer, PlacementMode};
