//! Text rendering of boards for the terminal.

use std::fmt::Write;

use super::input::row_label;
use crate::engine::{Board, Cell, Fleet, Mark, TrackingGrid};

const GAP: &str = "      ";

fn owner_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::ShipPresent => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'O',
    }
}

fn tracking_symbol(mark: Mark) -> char {
    match mark {
        Mark::Unknown => '.',
        Mark::Hit => 'X',
        Mark::Miss => 'O',
    }
}

fn header(size: usize) -> String {
    let mut line = String::from("  ");
    for c in 1..=size {
        let _ = write!(line, "{:>3}", c);
    }
    line
}

fn row_line(r: usize, size: usize, symbol: impl Fn(usize) -> char) -> String {
    let mut line = String::new();
    let _ = write!(line, "{} ", row_label(r));
    for c in 0..size {
        let _ = write!(line, "{:>3}", symbol(c));
    }
    line
}

/// Owner's board on the left, tracking grid on the right. Ship cells are
/// only ever drawn on the left panel.
pub fn render_boards(board: &Board, tracking: &TrackingGrid) -> String {
    let left_size = board.size();
    let right_size = tracking.size();
    let width = 2 + 3 * left_size;
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}{}{}", "Your fleet", GAP, "Enemy waters", width = width);
    let _ = writeln!(
        out,
        "{:<width$}{}{}",
        header(left_size),
        GAP,
        header(right_size),
        width = width
    );
    for r in 0..left_size.max(right_size) {
        let left = if r < left_size {
            row_line(r, left_size, |c| {
                board.get((r, c)).map(owner_symbol).unwrap_or(' ')
            })
        } else {
            String::new()
        };
        let right = if r < right_size {
            row_line(r, right_size, |c| {
                tracking.get((r, c)).map(tracking_symbol).unwrap_or(' ')
            })
        } else {
            String::new()
        };
        let _ = writeln!(out, "{:<width$}{}{}", left, GAP, right, width = width);
    }
    out.push_str("Legend: S=Ship  X=Hit  O=Miss  .=Water/Unknown\n");
    out
}

/// A single board with ships shown, used during placement.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = header(size);
    out.push('\n');
    for r in 0..size {
        out.push_str(&row_line(r, size, |c| {
            board.get((r, c)).map(owner_symbol).unwrap_or(' ')
        }));
        out.push('\n');
    }
    out
}

/// One line per ship: name, length and whether it is still afloat.
pub fn render_fleet_status(fleet: &Fleet, board: &Board) -> String {
    let mut out = String::new();
    for ship in fleet.ships() {
        let status = if ship.is_sunk(board) { "SUNK" } else { "afloat" };
        let _ = writeln!(out, "  {} ({}): {}", ship.name(), ship.cells().len(), status);
    }
    out
}
