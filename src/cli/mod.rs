//! Command-line input parsing and board rendering
//!
//! This module provides the text collaborators of the game:
//! - input: coordinate, orientation and placement command parsing
//! - render: two-panel board display and fleet status

#![cfg(feature = "std")]

pub mod input;
pub mod render;

pub use input::*;
pub use render::*;
