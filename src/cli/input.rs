//! Parsing of typed coordinates, orientations and placement commands.
//!
//! Coordinates are a row letter followed by a column number, `A1` being the
//! top-left cell. Input is case-insensitive and surrounding whitespace is
//! ignored.

use crate::engine::{Coord, GameError, Orientation, PlacementRequest};

fn invalid(msg: String) -> GameError {
    GameError::InvalidInputFormat(msg)
}

/// Label of row `r`: `A` for row 0.
pub fn row_label(r: usize) -> char {
    (b'A' + r as u8) as char
}

/// Format a coordinate the way players type it, e.g. `(1, 6)` as `B7`.
pub fn coord_to_string((r, c): Coord) -> String {
    format!("{}{}", row_label(r), c + 1)
}

/// Parse `B7` into `(1, 6)` on a `size x size` grid.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, GameError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or_else(|| invalid("empty coordinate".to_string()))?
        .to_ascii_uppercase();
    let last_row = row_label(size.saturating_sub(1));
    if !row_ch.is_ascii_uppercase() {
        return Err(invalid(format!(
            "'{}' is not a row letter (A-{})",
            row_ch, last_row
        )));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= size {
        return Err(invalid(format!(
            "row '{}' is off the board (A-{})",
            row_ch, last_row
        )));
    }
    let col_str = chars.as_str();
    if col_str.is_empty() {
        return Err(invalid(format!("missing column number after '{}'", row_ch)));
    }
    let col: usize = col_str
        .parse()
        .map_err(|_| invalid(format!("'{}' is not a column number (1-{})", col_str, size)))?;
    if col == 0 || col > size {
        return Err(invalid(format!("column {} is off the board (1-{})", col, size)));
    }
    Ok((row, col - 1))
}

/// Parse an orientation token. Only the first character counts.
pub fn parse_orientation(input: &str) -> Result<Orientation, GameError> {
    match input.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('H') => Ok(Orientation::Horizontal),
        Some('V') => Ok(Orientation::Vertical),
        Some(other) => Err(invalid(format!("orientation must be H or V, not '{}'", other))),
        None => Err(invalid("missing orientation".to_string())),
    }
}

/// Parse a placement command: `random`, or a coordinate with an optional
/// orientation (`A1 V`). Orientation defaults to horizontal.
pub fn parse_placement(input: &str, size: usize) -> Result<PlacementRequest, GameError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("random") {
        return Ok(PlacementRequest::Random);
    }
    let mut parts = input.split_whitespace();
    let coord = parts
        .next()
        .ok_or_else(|| invalid("enter a coordinate and orientation, e.g. A1 H".to_string()))?;
    let origin = parse_coord(coord, size)?;
    let orientation = match parts.next() {
        Some(token) => parse_orientation(token)?,
        None => Orientation::Horizontal,
    };
    if let Some(extra) = parts.next() {
        return Err(invalid(format!("unexpected '{}' after the orientation", extra)));
    }
    Ok(PlacementRequest::At(origin, orientation))
}

/// Parse a yes/no answer; an empty answer means no.
pub fn parse_yes_no(input: &str) -> Result<bool, GameError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "" | "n" | "no" => Ok(false),
        other => Err(invalid(format!("answer y or n, not '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corners() {
        assert_eq!(parse_coord("A1", 10), Ok((0, 0)));
        assert_eq!(parse_coord("j10", 10), Ok((9, 9)));
        assert_eq!(parse_coord("  b7 ", 10), Ok((1, 6)));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "A", "1A", "K1", "A0", "A11", "A-1", "AB", "?3"] {
            assert!(
                matches!(parse_coord(bad, 10), Err(GameError::InvalidInputFormat(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn coord_string_matches_parse() {
        assert_eq!(coord_to_string((1, 6)), "B7");
        assert_eq!(coord_to_string((9, 9)), "J10");
    }

    #[test]
    fn placement_commands() {
        assert_eq!(parse_placement("random", 10), Ok(PlacementRequest::Random));
        assert_eq!(parse_placement("RANDOM", 10), Ok(PlacementRequest::Random));
        assert_eq!(
            parse_placement("c3 v", 10),
            Ok(PlacementRequest::At((2, 2), Orientation::Vertical))
        );
        assert_eq!(
            parse_placement("A1 horizontal", 10),
            Ok(PlacementRequest::At((0, 0), Orientation::Horizontal))
        );
        assert_eq!(
            parse_placement("D4", 10),
            Ok(PlacementRequest::At((3, 3), Orientation::Horizontal))
        );
        assert!(parse_placement("D4 X", 10).is_err());
        assert!(parse_placement("", 10).is_err());
        assert!(parse_placement("D4 H extra", 10).is_err());
    }

    #[test]
    fn yes_no() {
        assert_eq!(parse_yes_no("Y"), Ok(true));
        assert_eq!(parse_yes_no(""), Ok(false));
        assert_eq!(parse_yes_no("no"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }
}
