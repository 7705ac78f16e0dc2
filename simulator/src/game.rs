use rand::Rng;
use sequence::{GameState, Grid, Turn};
use serde::Serialize;
use tracing::debug;

use crate::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum GameResult {
    /// Five chips in a row after this many turns.
    Sequence { turns: usize },
    /// The turn limit was reached without a sequence.
    OutOfTurns { turns: usize },
}

/// Everything that happened in one game, in order.
#[derive(Clone, Debug, Serialize)]
pub struct PlayedGame {
    pub num_players: usize,
    pub turns: Vec<Turn>,
    pub grid: Grid,
    pub result: GameResult,
}

/// Plays turns until there is a sequence on the grid or the turn limit is hit.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R, config: &Config) -> anyhow::Result<PlayedGame> {
    let mut state = GameState::new(config.num_players);
    let mut turns = Vec::with_capacity(config.max_turns);

    let mut result = GameResult::OutOfTurns {
        turns: config.max_turns,
    };
    for turn_idx in 0..config.max_turns {
        let turn = state.take_turn(rng)?;
        debug!(
            turn_idx,
            card = %turn.card,
            coord = %turn.placement.coord,
            score = turn.placement.score
        );
        turns.push(turn);
        if state.has_sequence() {
            result = GameResult::Sequence {
                turns: turn_idx + 1,
            };
            break;
        }
    }

    Ok(PlayedGame {
        num_players: config.num_players,
        turns,
        grid: state.grid,
        result,
    })
}
