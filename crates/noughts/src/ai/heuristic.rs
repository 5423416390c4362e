//! Fixed opening preference: center, then corners, then edges.

use super::super::{Board, Position};

/// Positions in the order the opening heuristic tries them.
pub const PREFERENCE: [Position; 9] = [
    // Center
    Position::Center,
    // Corners
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    // Edges
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Returns the first free square in [`PREFERENCE`] order.
///
/// The preference list covers every square, so this only returns `None`
/// on a full board.
pub fn preferred_move(board: &Board) -> Option<Position> {
    PREFERENCE.iter().copied().find(|&pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_center_first() {
        assert_eq!(preferred_move(&Board::new()), Some(Position::Center));
    }

    #[test]
    fn test_corners_before_edges() {
        let board = Board::new()
            .with(Position::Center, Mark::X)
            .with(Position::TopLeft, Mark::O);
        assert_eq!(preferred_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_edges_after_corners() {
        let board = [
            Position::Center,
            Position::TopLeft,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ]
        .iter()
        .zip([Mark::X, Mark::O].iter().cycle())
        .fold(Board::new(), |board, (&pos, &mark)| board.with(pos, mark));
        assert_eq!(preferred_move(&board), Some(Position::TopCenter));
    }

    #[test]
    fn test_full_board_has_no_preference() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |board, &pos| board.with(pos, Mark::O));
        assert_eq!(preferred_move(&board), None);
    }
}
