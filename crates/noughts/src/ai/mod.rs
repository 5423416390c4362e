//! Computer opponent.
//!
//! [`select_move`] is the policy the session plays with: the fixed
//! [`heuristic`] preference first, full [`minimax`] search only when the
//! preference finds nothing. The preference list names all nine squares,
//! so on any board with a free square the search is never reached. That
//! shadowing is the game's established behaviour and is kept as-is;
//! [`Strategy::Minimax`] plays the search on its own.

pub mod heuristic;
pub mod minimax;

pub use heuristic::{PREFERENCE, preferred_move};
pub use minimax::{best_move, minimax};

use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chooses the AI's square: opening preference, then full search.
///
/// Returns `None` only on a full board.
pub fn select_move(board: &Board, ai: Mark) -> Option<Position> {
    preferred_move(board).or_else(|| best_move(board, ai))
}

/// Move-selection policy used by the computer player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Center, corners, edges; search as a fallback.
    #[default]
    OpeningBook,
    /// Full minimax search on every move.
    Minimax,
}

impl Strategy {
    /// Chooses a free square for `ai` on `board`.
    #[instrument(skip(board))]
    pub fn choose(self, board: &Board, ai: Mark) -> Option<Position> {
        let choice = match self {
            Strategy::OpeningBook => select_move(board, ai),
            Strategy::Minimax => best_move(board, ai),
        };
        debug!(?choice, "AI chose square");
        choice
    }
}
