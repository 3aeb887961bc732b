#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use crate::engine::*;
pub use player::{setup_side, AiPlayer, GameRunner, Player};
#[cfg(feature = "std")]
pub use player::{CliPlayer, PlacementMode};
#[cfg(feature = "std")]
pub use logging::init_logging;
