pub use cards::*;
pub use errors::*;
pub use game_state::*;
pub use grid::*;
pub use layout::*;
pub use placement::*;
pub use pool::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod errors;
mod game_state;
mod grid;
mod layout;
mod placement;
mod pool;
mod turn;
mod visualization;
