//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameInProgress, Mark};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// Holds on the board itself, not just the history: X has placed either
/// as many marks as O or one more, and the mark to move follows from that.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let x_count = game.board().count(Mark::X);
        let o_count = game.board().count(Mark::O);

        let expected_next = match x_count.checked_sub(o_count) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => return false,
        };

        let history_alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(i, action)| action.player == if i % 2 == 0 { Mark::X } else { Mark::O });

        history_alternates && game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
