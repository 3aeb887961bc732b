// Computer targeting: a uniform pick among cells it has not fired at yet.

use rand::Rng;

use super::common::Coord;
use super::tracking::TrackingGrid;

/// Choose the next target uniformly among the unknown cells of `tracking`.
///
/// Returns `None` once every cell has been fired at.
pub fn choose_shot<R: Rng + ?Sized>(tracking: &TrackingGrid, rng: &mut R) -> Option<Coord> {
    let choices = tracking.unknown_cells();
    if choices.is_empty() {
        return None;
    }
    Some(choices[rng.random_range(0..choices.len())])
}
