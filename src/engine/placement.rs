//! Fleet placement: random search and externally guided placement.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::{Coord, GameError, PlacementError};
use super::config::MAX_PLACEMENT_ATTEMPTS;
use super::ship::{Fleet, Orientation, ShipDef};

/// Returns a random legal `(origin, orientation)` for `def` on `board`.
///
/// Orientation is a fair coin; the origin is uniform over the range that
/// keeps the ship on the board. Gives up with
/// [`GameError::PlacementExhausted`] after [`MAX_PLACEMENT_ATTEMPTS`] samples.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    def: ShipDef,
    rng: &mut R,
) -> Result<(Coord, Orientation), GameError> {
    let size = board.size();
    let len = def.length();
    if size == 0 || len > size {
        return Err(GameError::PlacementExhausted(def.name()));
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orient {
            Orientation::Horizontal => (size - 1, size - len),
            Orientation::Vertical => (size - len, size - 1),
        };
        let origin = (rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        if board.can_place(origin, len, orient) {
            return Ok((origin, orient));
        }
    }
    Err(GameError::PlacementExhausted(def.name()))
}

/// Place a single ship at a random legal position.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    def: ShipDef,
    rng: &mut R,
) -> Result<Vec<Coord>, GameError> {
    let (origin, orient) = random_placement(board, def, rng)?;
    let cells = board.place_ship(origin, def.length(), orient)?;
    debug!("{} placed at {:?} {:?}", def.name(), origin, orient);
    Ok(cells)
}

/// Place every ship of `ships`, in order, at random.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    ships: &[ShipDef],
    rng: &mut R,
) -> Result<Fleet, GameError> {
    let mut fleet = Fleet::new();
    for &def in ships {
        let cells = place_ship_randomly(board, def, rng)?;
        fleet.insert(def, cells);
    }
    Ok(fleet)
}

/// One answer from a [`PlacementSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRequest {
    /// Put the ship at this origin with this orientation.
    At(Coord, Orientation),
    /// Let the random strategy place this ship.
    Random,
}

/// External collaborator that chooses where ships go during guided placement.
pub trait PlacementSource {
    /// Ask where `def` should go. `board` shows the ships placed so far.
    fn request(&mut self, def: ShipDef, board: &Board) -> Result<PlacementRequest, GameError>;

    /// The last request for `def` was refused for `reason`.
    fn rejected(&mut self, _def: ShipDef, _reason: PlacementError) {}

    /// `def` now occupies `cells`.
    fn placed(&mut self, _def: ShipDef, _cells: &[Coord], _board: &Board) {}
}

/// Place every ship of `ships`, in order, at positions chosen by `source`.
///
/// Infeasible requests are reported back through
/// [`PlacementSource::rejected`] and asked again until one is accepted.
pub fn place_fleet_guided<S, R>(
    board: &mut Board,
    ships: &[ShipDef],
    source: &mut S,
    rng: &mut R,
) -> Result<Fleet, GameError>
where
    S: PlacementSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut fleet = Fleet::new();
    for &def in ships {
        let cells = loop {
            match source.request(def, board)? {
                PlacementRequest::Random => break place_ship_randomly(board, def, rng)?,
                PlacementRequest::At(origin, orient) => {
                    match board.place_ship(origin, def.length(), orient) {
                        Ok(cells) => break cells,
                        Err(reason) => {
                            debug!("rejected {} at {:?} {:?}: {}", def.name(), origin, orient, reason);
                            source.rejected(def, reason);
                        }
                    }
                }
            }
        };
        source.placed(def, &cells, board);
        fleet.insert(def, cells);
    }
    Ok(fleet)
}
