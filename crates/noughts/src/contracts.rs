//! Checks wrapped around every placement.
//!
//! [`MoveContract::pre`] decides whether a move may be played at all and
//! runs in every build. [`MoveContract::post`] re-checks the board and
//! history invariants on the resulting game and runs in debug builds.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::typestate::GameInProgress;
use tracing::{debug, warn};

/// Checks on either side of a state transition.
pub trait Contract<S, A> {
    /// Checks that `action` may be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks the state produced from `before`.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// The target square is free.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        game.board()
            .is_empty(mov.position)
            .then_some(())
            .ok_or(MoveError::SquareOccupied(mov.position))
    }
}

/// The mark being placed is the mark to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the mark that is not to move.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        (mov.player == game.to_move())
            .then_some(())
            .ok_or(MoveError::WrongPlayer(mov.player))
    }
}

/// Both placement checks. Turn order is checked first, so a move out of
/// turn onto a taken square reports the turn.
pub struct LegalMove;

impl LegalMove {
    /// Runs [`PlayersTurn`] then [`SquareIsEmpty`].
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)
            .and_then(|()| SquareIsEmpty::check(mov, game))
            .inspect_err(|error| debug!(%mov, %error, "Illegal move"))
    }
}

/// The contract [`GameInProgress::make_move`] plays under.
///
/// Before: [`LegalMove`]. After: [`TicTacToeInvariants`] on the new game,
/// finished or not.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        let Err(violations) = TicTacToeInvariants::check_all(after) else {
            return Ok(());
        };
        let broken: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        warn!(?broken, moves = after.history().len(), "Board invariants broken");
        Err(MoveError::InvariantViolation(broken.join("; ")))
    }
}
