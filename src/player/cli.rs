#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::error;
use rand::rngs::SmallRng;

use crate::cli::{coord_to_string, parse_coord, parse_placement, parse_yes_no};
use crate::cli::{render_board, render_boards};
use crate::engine::{
    board::Board,
    common::{Coord, GameError, PlacementError, ShotResult},
    config::SHIPS,
    game::{GameOutcome, GameStatus},
    placement::{self, PlacementRequest, PlacementSource},
    ship::{Fleet, ShipDef},
    tracking::TrackingGrid,
};

use super::Player;

/// How the human's fleet gets onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Ask for every ship's position.
    Manual,
    /// Place the whole fleet at random.
    Random,
}

/// Interactive player reading commands from `input` and writing to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    placement: PlacementMode,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            placement: PlacementMode::Random,
        }
    }

    pub fn set_placement(&mut self, mode: PlacementMode) {
        self.placement = mode;
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    // Display failures are not game failures; the next prompt read will
    // surface a dead terminal as `InputClosed`.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.write_all(b"\n");
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => {
                error!("failed to read input: {}", e);
                Err(GameError::InputClosed)
            }
        }
    }

    /// The one setup question: place ships by hand or at random.
    pub fn ask_manual_placement(&mut self) -> Result<bool, GameError> {
        loop {
            let line = self.prompt("Place your ships manually? (y/N): ")?;
            match parse_yes_no(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => self.say(format_args!("✗ {}", e)),
            }
        }
    }

    fn placement_help(&mut self) {
        self.say(format_args!(
            "Type a start cell and a direction, e.g. 'A1 H' or 'C5 V'.\n\
             Rows are letters A-J, columns are numbers 1-10.\n\
             H runs to the right, V runs down. 'random' places this ship for you."
        ));
    }

    fn targeting_help(&mut self) {
        self.say(format_args!(
            "Type the cell to fire at, e.g. 'B7'.\n\
             X marks a hit, O a miss and . a cell you have not fired at."
        ));
    }
}

impl<R: BufRead, W: Write> PlacementSource for CliPlayer<R, W> {
    fn request(&mut self, def: ShipDef, board: &Board) -> Result<PlacementRequest, GameError> {
        loop {
            let line = self.prompt(&format!(
                "Place your {} ({} cells), e.g. 'A1 H' or 'random': ",
                def.name(),
                def.length()
            ))?;
            if line.eq_ignore_ascii_case("help") {
                self.placement_help();
                continue;
            }
            match parse_placement(&line, board.size()) {
                Ok(request) => return Ok(request),
                Err(e) => self.say(format_args!("✗ {}", e)),
            }
        }
    }

    fn rejected(&mut self, def: ShipDef, reason: PlacementError) {
        self.say(format_args!(
            "✗ The {} does not fit there: {}. Try another spot.",
            def.name(),
            reason
        ));
    }

    fn placed(&mut self, def: ShipDef, cells: &[Coord], board: &Board) {
        let start = cells.first().copied().map(coord_to_string).unwrap_or_default();
        self.say(format_args!("✓ {} placed at {}", def.name(), start));
        self.say(format_args!("{}", render_board(board)));
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Fleet, GameError> {
        match self.placement {
            PlacementMode::Manual => {
                self.say(format_args!(
                    "Manual placement: give a start cell and H or V, e.g. A1 H. Type 'help' for more."
                ));
                self.say(format_args!("{}", render_board(board)));
                placement::place_fleet_guided(board, &SHIPS, self, rng)
            }
            PlacementMode::Random => {
                let fleet = placement::place_fleet_randomly(board, &SHIPS, rng)?;
                self.say(format_args!("Your ships were placed at random."));
                Ok(fleet)
            }
        }
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        tracking: &TrackingGrid,
    ) -> Result<Option<Coord>, GameError> {
        loop {
            let line = self.prompt("Fire at (e.g. B7): ")?;
            if line.eq_ignore_ascii_case("help") {
                self.targeting_help();
                continue;
            }
            let target = match parse_coord(&line, tracking.size()) {
                Ok(target) => target,
                Err(e) => {
                    self.say(format_args!("✗ {}", e));
                    continue;
                }
            };
            if !tracking.is_unknown(target) {
                self.say(format_args!(
                    "✗ You already fired at {}. Pick another cell.",
                    coord_to_string(target)
                ));
                continue;
            }
            return Ok(Some(target));
        }
    }

    fn show_boards(&mut self, board: &Board, tracking: &TrackingGrid) {
        self.say(format_args!("\n{}", render_boards(board, tracking)));
    }

    fn target_rejected(&mut self, target: Coord, err: &GameError) {
        self.say(format_args!("✗ {}: {}", coord_to_string(target), err));
    }

    fn handle_shot_result(&mut self, coord: Coord, result: ShotResult) {
        let at = coord_to_string(coord);
        match result {
            ShotResult::Hit => self.say(format_args!("HIT at {}! Fire again.", at)),
            ShotResult::Sunk(name) => self.say(format_args!(
                "HIT at {}! You sank the enemy {}!",
                at, name
            )),
            ShotResult::Miss => self.say(format_args!("Splash, {} is water.", at)),
            ShotResult::AlreadyFired => {
                self.say(format_args!("{} was already hit. Choose again.", at))
            }
        }
    }

    fn handle_opponent_shot(&mut self, coord: Coord, result: ShotResult) {
        let at = coord_to_string(coord);
        match result {
            ShotResult::Hit => self.say(format_args!("The computer fires at {}... and HITS!", at)),
            ShotResult::Sunk(name) => self.say(format_args!(
                "The computer fires at {}... and sinks your {}!",
                at, name
            )),
            ShotResult::Miss => self.say(format_args!("The computer fires at {}... and misses.", at)),
            ShotResult::AlreadyFired => self.say(format_args!(
                "The computer fired at {} again. Its turn is skipped.",
                at
            )),
        }
    }

    fn handle_game_over(&mut self, outcome: &GameOutcome, board: &Board, tracking: &TrackingGrid) {
        self.say(format_args!("\n{}", render_boards(board, tracking)));
        match outcome.status {
            GameStatus::PlayerWon => {
                self.say(format_args!("VICTORY! Every enemy ship has been sunk."))
            }
            GameStatus::ComputerWon => {
                self.say(format_args!("DEFEAT. The computer sank your whole fleet."))
            }
            _ => self.say(format_args!("No cells left to target. The battle ends in a draw.")),
        }
        self.say(format_args!(
            "Shots fired: you {}, computer {}.",
            outcome.player_shots, outcome.computer_shots
        ));
    }
}

