use rand::Rng;

use crate::{take_turn, CardPool, Cell, Coord, EmptyPool, Grid, Turn};

/// The four corners, which are free spaces for every player.
pub const FREE_SPACES: [Coord; 4] = [
    Coord::at(0, 0),
    Coord::at(0, 9),
    Coord::at(9, 9),
    Coord::at(9, 0),
];

/// Builds the starting grid and the full card pool.
///
/// With a single player the free corners are stored as chips, so they count
/// towards that player's sequences. With more players they are marked
/// [`Cell::FreeSpace`], which is distinguishable from any chip.
pub fn init(num_players: usize) -> (Grid, CardPool) {
    let free_space = if num_players > 1 {
        Cell::FreeSpace
    } else {
        Cell::Chip
    };
    let mut grid = Grid::empty();
    for corner in FREE_SPACES {
        grid.set(corner, free_space);
    }
    (grid, CardPool::two_decks())
}

/// The grid and the card pool of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub pool: CardPool,
}

impl GameState {
    pub fn new(num_players: usize) -> Self {
        let (grid, pool) = init(num_players);
        Self { grid, pool }
    }

    /// See [`take_turn()`].
    pub fn take_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Turn, EmptyPool> {
        take_turn(&mut self.grid, &self.pool, rng)
    }

    pub fn has_sequence(&self) -> bool {
        self.grid.has_sequence()
    }
}
