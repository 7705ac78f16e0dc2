use crate::{Card, Coord, NUM_CARDS};

/// The two cells printed on the board for every card, indexed by [`Card::to_index()`].
///
/// Rows of the same suit run in rank order 2-10, Q, K, A. Together the 96 entries
/// cover every cell except the four corners exactly once.
static LAYOUT: [[Coord; 2]; NUM_CARDS] = [
    // Spades
    [Coord::at(0, 1), Coord::at(8, 6)],
    [Coord::at(0, 2), Coord::at(8, 5)],
    [Coord::at(0, 3), Coord::at(8, 4)],
    [Coord::at(0, 4), Coord::at(8, 3)],
    [Coord::at(0, 5), Coord::at(8, 2)],
    [Coord::at(0, 6), Coord::at(8, 1)],
    [Coord::at(0, 7), Coord::at(7, 1)],
    [Coord::at(0, 8), Coord::at(6, 1)],
    [Coord::at(1, 9), Coord::at(5, 1)],
    [Coord::at(2, 9), Coord::at(4, 1)],
    [Coord::at(3, 9), Coord::at(3, 1)],
    [Coord::at(4, 9), Coord::at(2, 1)],
    // Diamonds
    [Coord::at(5, 9), Coord::at(2, 2)],
    [Coord::at(6, 9), Coord::at(2, 3)],
    [Coord::at(7, 9), Coord::at(2, 4)],
    [Coord::at(8, 9), Coord::at(2, 5)],
    [Coord::at(9, 8), Coord::at(2, 6)],
    [Coord::at(9, 7), Coord::at(2, 7)],
    [Coord::at(9, 6), Coord::at(3, 7)],
    [Coord::at(9, 5), Coord::at(4, 7)],
    [Coord::at(9, 4), Coord::at(5, 7)],
    [Coord::at(9, 3), Coord::at(6, 7)],
    [Coord::at(9, 2), Coord::at(7, 7)],
    [Coord::at(9, 1), Coord::at(7, 6)],
    // Clubs
    [Coord::at(1, 4), Coord::at(3, 6)],
    [Coord::at(1, 3), Coord::at(3, 5)],
    [Coord::at(1, 2), Coord::at(3, 4)],
    [Coord::at(1, 1), Coord::at(3, 3)],
    [Coord::at(1, 0), Coord::at(3, 2)],
    [Coord::at(2, 0), Coord::at(4, 2)],
    [Coord::at(3, 0), Coord::at(5, 2)],
    [Coord::at(4, 0), Coord::at(6, 2)],
    [Coord::at(5, 0), Coord::at(7, 2)],
    [Coord::at(6, 0), Coord::at(7, 3)],
    [Coord::at(7, 0), Coord::at(7, 4)],
    [Coord::at(8, 0), Coord::at(7, 5)],
    // Hearts
    [Coord::at(8, 7), Coord::at(5, 4)],
    [Coord::at(8, 8), Coord::at(5, 5)],
    [Coord::at(7, 8), Coord::at(4, 5)],
    [Coord::at(6, 8), Coord::at(4, 4)],
    [Coord::at(5, 8), Coord::at(4, 3)],
    [Coord::at(4, 8), Coord::at(5, 3)],
    [Coord::at(3, 8), Coord::at(6, 3)],
    [Coord::at(2, 8), Coord::at(6, 4)],
    [Coord::at(1, 8), Coord::at(6, 5)],
    [Coord::at(1, 7), Coord::at(6, 6)],
    [Coord::at(1, 6), Coord::at(5, 6)],
    [Coord::at(1, 5), Coord::at(4, 6)],
];

/// The two cells a card may occupy, as `[first, second]`.
///
/// The order only matters for [`choose_spot()`](crate::choose_spot), which
/// prefers the second cell on a tie.
pub fn candidates(card: Card) -> [Coord; 2] {
    LAYOUT[card.to_index()]
}

impl Card {
    /// See [`candidates()`].
    pub fn candidates(self) -> [Coord; 2] {
        candidates(self)
    }
}
