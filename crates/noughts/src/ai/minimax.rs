//! Exhaustive minimax search.
//!
//! Scores are from the AI's point of view: an AI win scores `10 - depth`,
//! a human win `-10 + depth`, a draw `0`. The depth adjustment prefers
//! quicker wins and slower losses.

use super::super::rules::evaluate;
use super::super::{Board, Mark, Outcome, Position};
use tracing::{instrument, trace};

const WIN: i32 = 10;

/// Scores `board` by searching every continuation.
///
/// `maximizing` is true when the AI is the next to place a mark.
pub fn minimax(board: Board, depth: i32, maximizing: bool, ai: Mark) -> i32 {
    match evaluate(&board) {
        Outcome::Win(winner) if winner == ai => return WIN - depth,
        Outcome::Win(_) => return -WIN + depth,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let scores = board
        .empty_positions()
        .map(|pos| minimax(board.with(pos, mover), depth + 1, !maximizing, ai));

    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

/// Picks the highest-scoring free square for `ai` by full search.
///
/// Ties keep the lowest index. Returns `None` on a full board.
#[instrument(skip(board), fields(free = board.empty_positions().count()))]
pub fn best_move(board: &Board, ai: Mark) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in board.empty_positions() {
        let score = minimax(board.with(pos, ai), 0, false, ai);
        trace!(%pos, score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}
