mod game;
mod recording;
pub use game::*;
pub use recording::*;

/// Settings shared by every game of a run.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// One player counts the free corners as own chips, more players don't.
    pub num_players: usize,
    /// A game without a sequence ends after this many turns.
    pub max_turns: usize,
}
