//! Tests for the computer's move selection.

use noughts::{Board, Mark, Outcome, Position, Strategy, best_move, evaluate, select_move};
use std::collections::HashSet;

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);

/// Every non-terminal position reachable by legal play, with the mark to move.
fn reachable_positions() -> Vec<(Board, Mark)> {
    fn walk(board: Board, to_move: Mark, seen: &mut HashSet<(Board, Mark)>) {
        if evaluate(&board) != Outcome::InProgress || !seen.insert((board, to_move)) {
            return;
        }
        for pos in board.empty_positions() {
            walk(board.with(pos, to_move), to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Mark::X, &mut seen);
    seen.into_iter().collect()
}

#[test]
fn test_empty_board_center_for_either_mark() {
    for ai in [Mark::X, Mark::O] {
        assert_eq!(select_move(&Board::new(), ai), Some(Position::Center));
        assert_eq!(Strategy::OpeningBook.choose(&Board::new(), ai), Some(Position::Center));
    }
}

#[test]
fn test_never_picks_occupied_square() {
    let positions = reachable_positions();
    assert!(positions.len() > 4000);

    for (board, to_move) in &positions {
        let pos = select_move(board, *to_move).expect("non-terminal board has a free square");
        assert!(board.is_empty(pos), "{:?} chose occupied {:?}", board, pos);
    }
}

#[test]
fn test_search_never_picks_occupied_square() {
    // Late positions only; early ones are covered by the optimal-play test.
    for (board, to_move) in reachable_positions()
        .iter()
        .filter(|(board, _)| board.empty_positions().count() <= 5)
    {
        let pos = best_move(board, *to_move).expect("non-terminal board has a free square");
        assert!(board.is_empty(pos), "{:?} chose occupied {:?}", board, pos);
    }
}

#[test]
fn test_minimax_against_itself_draws() {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    while evaluate(&board) == Outcome::InProgress {
        let pos = Strategy::Minimax
            .choose(&board, to_move)
            .expect("in-progress board has a free square");
        board = board.with(pos, to_move);
        to_move = to_move.opponent();
    }

    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_winning_corner_agrees_with_preference() {
    // X X _ / O O _ / _ _ _ with X to move: the preference reaches corner 2
    // first, which is also the immediate win.
    let board = Board::from([X, X, None, O, O, None, None, None, None]);
    assert_eq!(select_move(&board, Mark::X), Some(Position::TopRight));
    assert_eq!(best_move(&board, Mark::X), Some(Position::TopRight));
}

#[test]
fn test_preference_can_miss_a_win() {
    // X X _ / O O _ / X _ _ with O to move: O wins at 5, but the preference
    // takes corner 2 because center is occupied and corners come first.
    let board = Board::from([X, X, None, O, O, None, X, None, None]);
    assert_eq!(best_move(&board, Mark::O), Some(Position::MiddleRight));
    assert_eq!(select_move(&board, Mark::O), Some(Position::TopRight));
}

#[test]
fn test_full_board_has_no_move() {
    let draw = Board::from([X, O, X, X, O, O, O, X, X]);
    assert_eq!(select_move(&draw, Mark::X), None);
    assert_eq!(Strategy::Minimax.choose(&draw, Mark::O), None);
}
