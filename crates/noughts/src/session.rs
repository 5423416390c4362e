//! Game session controller.
//!
//! A [`Session`] is the value a UI layer holds between clicks. Every
//! operation takes the session and hands back the next one; actions that
//! make no sense in the current phase leave it unchanged. The computer's
//! turns happen inside [`Session::select_side`] and
//! [`Session::apply_human_move`], so a returned session is always either
//! waiting on the human or finished.

use super::action::{Move, MoveError};
use super::phases::{Outcome, Phase};
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Mark, Position, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One game against the computer, in whichever phase it is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// Waiting for the human to choose X or O.
    AwaitingSide(GameSetup),
    /// Moves are being played.
    InProgress(GameInProgress),
    /// Won or drawn.
    Finished(GameFinished),
}

impl Session {
    /// Creates a session waiting for side selection.
    pub fn new() -> Self {
        Session::AwaitingSide(GameSetup::new())
    }

    /// Creates a session whose computer player uses `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Session::AwaitingSide(GameSetup::with_strategy(strategy))
    }

    /// Chooses the human's side and starts the game.
    ///
    /// X moves first, so choosing O lets the computer open before this
    /// returns. Ignored unless the session is awaiting a side. If the
    /// computer cannot open, the session stays awaiting a side.
    #[instrument(skip(self))]
    pub fn select_side(self, mark: Mark) -> Session {
        let setup = match self {
            Session::AwaitingSide(setup) => setup,
            other => {
                debug!(phase = ?other.phase(), "Side already selected, ignoring");
                return other;
            }
        };

        match setup.clone().start(mark).settle() {
            Ok(result) => result.into(),
            Err(error) => {
                warn!(%error, "Computer failed to open");
                Session::AwaitingSide(setup)
            }
        }
    }

    /// Plays the human's mark at `cell` (0-8), then the computer's reply.
    ///
    /// Out-of-range or occupied cells, moves before a side is chosen and
    /// moves after the game ended all leave the session unchanged.
    #[instrument(skip(self))]
    pub fn apply_human_move(mut self, cell: usize) -> Session {
        let result = Position::try_from(cell).and_then(|position| self.try_human_move(position));
        if let Err(error) = result {
            debug!(%error, cell, "Ignoring human move");
        }
        self
    }

    /// Plays the human's mark at `position`, then the computer's reply,
    /// reporting why a move was refused.
    ///
    /// On error the session is unchanged. That includes a failed computer
    /// reply: the human's move is taken back with it, so the session never
    /// waits on a computer turn.
    pub fn try_human_move(&mut self, position: Position) -> Result<(), MoveError> {
        let game = match self {
            Session::InProgress(game) => game,
            Session::AwaitingSide(_) => return Err(MoveError::NoSideSelected),
            Session::Finished(_) => return Err(MoveError::GameOver),
        };

        let next = match game.human_move(position)? {
            GameResult::InProgress(game) => game.settle().map_err(|error| {
                warn!(%error, %position, "Computer failed to reply, taking back human move");
                error
            })?,
            finished => finished,
        };
        *self = next.into();
        Ok(())
    }

    /// Clears everything, returning to side selection.
    ///
    /// The computer's strategy is kept.
    #[instrument(skip(self))]
    pub fn restart(self) -> Session {
        Session::with_strategy(self.strategy())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            Session::AwaitingSide(setup) => setup.board(),
            Session::InProgress(game) => game.board(),
            Session::Finished(game) => game.board(),
        }
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        match self {
            Session::AwaitingSide(_) | Session::InProgress(_) => Outcome::InProgress,
            Session::Finished(game) => game.outcome(),
        }
    }

    /// Returns the phase tag.
    pub fn phase(&self) -> Phase {
        match self {
            Session::AwaitingSide(_) => Phase::AwaitingSide,
            Session::InProgress(_) => Phase::InProgress,
            Session::Finished(_) => Phase::Finished,
        }
    }

    /// Returns the human's mark, once chosen.
    pub fn human_mark(&self) -> Option<Mark> {
        match self {
            Session::AwaitingSide(_) => None,
            Session::InProgress(game) => Some(game.human()),
            Session::Finished(game) => Some(game.human()),
        }
    }

    /// Returns the computer's mark, once the human has chosen.
    pub fn ai_mark(&self) -> Option<Mark> {
        self.human_mark().map(Mark::opponent)
    }

    /// Returns the mark to move next. X before any side is chosen.
    pub fn turn_owner(&self) -> Mark {
        match self {
            Session::AwaitingSide(_) => Mark::X,
            Session::InProgress(game) => game.to_move(),
            Session::Finished(game) => game.to_move(),
        }
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        match self {
            Session::AwaitingSide(_) => &[],
            Session::InProgress(game) => game.history(),
            Session::Finished(game) => game.history(),
        }
    }

    /// Returns the computer's strategy.
    pub fn strategy(&self) -> Strategy {
        match self {
            Session::AwaitingSide(setup) => setup.strategy(),
            Session::InProgress(game) => game.strategy(),
            Session::Finished(game) => game.strategy(),
        }
    }

    /// One-line status for display.
    pub fn status_text(&self) -> String {
        match self {
            Session::AwaitingSide(_) => "Please select your side:".to_string(),
            Session::InProgress(game) => format!("Next player: {}", game.to_move()),
            Session::Finished(game) => game.outcome().to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameResult> for Session {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(game) => Session::InProgress(game),
            GameResult::Finished(game) => Session::Finished(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_awaits_side() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::AwaitingSide);
        assert_eq!(session.human_mark(), None);
        assert_eq!(session.turn_owner(), Mark::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.status_text(), "Please select your side:");
    }

    #[test]
    fn test_move_before_side_is_ignored() {
        let mut session = Session::new();
        assert_eq!(session.try_human_move(Position::Center), Err(MoveError::NoSideSelected));
        assert_eq!(session.apply_human_move(4), Session::new());
    }

    #[test]
    fn test_select_side_twice_is_ignored() {
        let session = Session::new().select_side(Mark::X);
        let again = session.clone().select_side(Mark::O);
        assert_eq!(again, session);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let session = Session::new().select_side(Mark::X);
        assert_eq!(session.clone().apply_human_move(9), session);
    }

    #[test]
    fn test_occupied_cell_reports_reason() {
        let mut session = Session::new().select_side(Mark::O);
        let before = session.clone();
        assert_eq!(
            session.try_human_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_status_after_human_x_move() {
        let session = Session::new().select_side(Mark::X).apply_human_move(0);
        assert_eq!(session.turn_owner(), Mark::X);
        assert_eq!(session.status_text(), "Next player: X");
    }

    #[test]
    fn test_restart_keeps_strategy() {
        let session = Session::with_strategy(Strategy::Minimax)
            .select_side(Mark::X)
            .apply_human_move(4)
            .restart();
        assert_eq!(session, Session::with_strategy(Strategy::Minimax));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_opening_keeps_side_selection() {
        // A stray O with no history makes the computer's opening break the
        // turn invariant.
        let mut setup = GameSetup::new();
        setup.board = Board::new().with(Position::TopLeft, Mark::O);
        let session = Session::AwaitingSide(setup.clone());

        let next = session.select_side(Mark::O);
        assert_eq!(next, Session::AwaitingSide(setup));
        assert_eq!(next.phase(), Phase::AwaitingSide);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_move_leaves_playable_session() {
        let mut session = Session::new().select_side(Mark::X);
        if let Session::InProgress(game) = &mut session {
            game.board.set(Position::BottomRight, crate::Square::Occupied(Mark::O));
        }
        let before = session.clone();

        assert!(matches!(
            session.try_human_move(Position::Center),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(session, before);
        assert_eq!(session.turn_owner(), Mark::X);
        assert_eq!(session.human_mark(), Some(Mark::X));
    }

    #[test]
    fn test_serde_snapshot_restores_session() {
        let session = Session::new().select_side(Mark::O).apply_human_move(0);
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
