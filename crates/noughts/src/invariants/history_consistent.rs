//! History consistency invariant: the history rebuilds the board.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: replaying the history onto an empty board gives the board.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let rebuilt = game
            .history()
            .iter()
            .fold(Board::new(), |board, action| board.with(action.position, action.player));

        rebuilt == *game.board() && game.board().empty_positions().count() + game.history().len() == 9
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}
