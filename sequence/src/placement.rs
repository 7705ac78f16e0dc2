use serde::{Deserialize, Serialize};

use crate::{candidates, Card, CardFromStrErr, Coord, Grid};

/// Added to a candidate's score for each chip already sitting on that candidate.
///
/// Large enough that an occupied candidate loses against an empty one on
/// any sparsely filled board, but it does not forbid playing there.
pub const OCCUPIED_PENALTY: f64 = 500.0;

/// The cell picked for a card, and its score (lower is better).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coord,
    pub score: f64,
}

/// Picks the candidate cell for `card` that is closest to the chips already on the grid.
///
/// Each candidate is scored by summing, over all chips on the grid, the
/// Euclidean distance from the chip to the candidate, or [`OCCUPIED_PENALTY`]
/// if the chip sits on the candidate itself. Free spaces are not chips and do not
/// contribute.
///
/// The first candidate wins only with a strictly lower score, so ties (including
/// the empty grid, where both scores are 0) go to the second candidate.
///
/// ```
/// # use sequence::{card, candidates, choose_spot, Grid};
/// let [_, second] = candidates(card!("club7"));
/// let placement = choose_spot(&Grid::empty(), card!("club7"));
/// assert_eq!(placement.coord, second);
/// assert_eq!(placement.score, 0.0);
/// ```
pub fn choose_spot(grid: &Grid, card: Card) -> Placement {
    let [first, second] = candidates(card);

    let mut first_score = 0.0;
    let mut second_score = 0.0;
    for chip in grid.chips() {
        first_score += chip_cost(chip, first);
        second_score += chip_cost(chip, second);
    }

    if first_score < second_score {
        Placement {
            coord: first,
            score: first_score,
        }
    } else {
        Placement {
            coord: second,
            score: second_score,
        }
    }
}

/// Like [`choose_spot()`], for a card given by its token (e.g. `"heartK"`).
pub fn choose_spot_for_token(grid: &Grid, token: &str) -> Result<Placement, CardFromStrErr> {
    let card = token.parse::<Card>()?;
    Ok(choose_spot(grid, card))
}

fn chip_cost(chip: Coord, candidate: Coord) -> f64 {
    if chip == candidate {
        OCCUPIED_PENALTY
    } else {
        chip.distance(candidate)
    }
}
