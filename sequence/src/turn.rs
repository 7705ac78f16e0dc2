use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{choose_spot, Card, CardPool, EmptyPool, Grid, Placement};

/// What happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub card: Card,
    pub placement: Placement,
}

/// Draws a card and puts a chip on the better of its two cells.
///
/// The card is picked at a uniformly random index of the pool and is not
/// removed from it. The cell is chosen by [`choose_spot()`] and marked as a
/// chip even if it already was one, so the grid gains at most one chip.
pub fn take_turn<R: Rng + ?Sized>(
    grid: &mut Grid,
    pool: &CardPool,
    rng: &mut R,
) -> Result<Turn, EmptyPool> {
    let card = pool.draw(rng).ok_or(EmptyPool)?;
    let placement = choose_spot(grid, card);
    grid.place_chip(placement.coord);
    trace!(%card, coord = %placement.coord, score = placement.score, "Placed chip");
    Ok(Turn { card, placement })
}
