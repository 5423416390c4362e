//! Phase-specific typestate structs for a human-vs-computer game.
//!
//! Each phase is its own type with its own fields. Only
//! [`GameInProgress`] and [`GameFinished`] carry the human's mark, so a
//! computer move can never be requested before a side is chosen, and a
//! finished game always has a terminal [`Outcome`].

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules::evaluate;
use super::{Board, Mark, Position, Square, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting for the human to pick a side.
///
/// The board is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSetup {
    pub(crate) board: Board,
    strategy: Strategy,
}

impl GameSetup {
    /// Creates a new game in setup phase with the default strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game whose computer player uses `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            board: Board::new(),
            strategy,
        }
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the computer's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Starts the game with the human playing `human`; X always moves first.
    ///
    /// The returned game may be waiting on the computer; see
    /// [`GameInProgress::settle`].
    #[instrument(skip(self))]
    pub fn start(self, human: Mark) -> GameInProgress {
        info!(%human, strategy = %self.strategy, "Starting game");
        GameInProgress {
            board: self.board,
            human,
            to_move: Mark::X,
            history: Vec::new(),
            strategy: self.strategy,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) human: Mark,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
    pub(crate) strategy: Strategy,
}

impl GameInProgress {
    /// Applies a move and returns the next state; `self` is left untouched.
    ///
    /// Preconditions are checked always, postconditions in debug builds,
    /// including on the move that ends the game.
    #[instrument(skip(self))]
    pub fn make_move(&self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(self, &action)?;

        let mut board = self.board;
        board.set(action.position, Square::Occupied(action.player));
        let mut history = self.history.clone();
        history.push(action);
        let next = GameInProgress {
            board,
            human: self.human,
            to_move: action.player.opponent(),
            history,
            strategy: self.strategy,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        match evaluate(&next.board) {
            Outcome::InProgress => Ok(GameResult::InProgress(next)),
            outcome => {
                info!(%outcome, "Game finished");
                Ok(GameResult::Finished(next.finish(outcome)))
            }
        }
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            board: self.board,
            human: self.human,
            to_move: self.to_move,
            history: self.history,
            outcome,
            strategy: self.strategy,
        }
    }

    /// Places the human's mark at `position`.
    pub fn human_move(&self, position: Position) -> Result<GameResult, MoveError> {
        self.make_move(Move::new(self.human, position))
    }

    /// Lets the computer place its mark.
    #[instrument(skip(self))]
    pub fn ai_move(&self) -> Result<GameResult, MoveError> {
        let ai = self.ai();
        if self.to_move != ai {
            return Err(MoveError::WrongPlayer(ai));
        }
        let position = self
            .strategy
            .choose(&self.board, ai)
            .ok_or(MoveError::GameOver)?;
        self.make_move(Move::new(ai, position))
    }

    /// Runs the computer's turn if it is due, so the result is either
    /// finished or waiting on the human.
    pub fn settle(self) -> Result<GameResult, MoveError> {
        if self.is_human_turn() {
            Ok(GameResult::InProgress(self))
        } else {
            self.ai_move()
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Returns the computer's mark.
    pub fn ai(&self) -> Mark {
        self.human.opponent()
    }

    /// True when the human is to move.
    pub fn is_human_turn(&self) -> bool {
        self.to_move == self.human
    }

    /// Returns the computer's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board, without computer replies.
    ///
    /// Moves left over after the game finishes are rejected.
    #[instrument]
    pub fn replay(human: Mark, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameSetup::new().start(human));

        for action in moves {
            result = match result {
                GameResult::InProgress(game) => game.make_move(*action)?,
                GameResult::Finished(_) => {
                    debug!(%action, "Move after game end");
                    return Err(MoveError::GameOver);
                }
            };
        }

        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is always `Win` or `Draw`; it is only ever taken from a
/// terminal board evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    human: Mark,
    to_move: Mark,
    history: Vec<Move>,
    outcome: Outcome,
    strategy: Strategy,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Returns the mark that would have moved next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the computer's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::with_strategy(self.strategy)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress(result: Result<GameResult, MoveError>) -> GameInProgress {
        match result {
            Ok(GameResult::InProgress(game)) => game,
            other => panic!("Expected in-progress game, got {:?}", other),
        }
    }

    #[test]
    fn test_start_x_moves_first() {
        let game = GameSetup::new().start(Mark::O);
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.ai(), Mark::X);
        assert!(!game.is_human_turn());
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let game = GameSetup::new().start(Mark::X);
        let before = game.clone();
        assert_eq!(
            game.make_move(Move::new(Mark::O, Position::Center)),
            Err(MoveError::WrongPlayer(Mark::O))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_settle_plays_computer_opening() {
        let game = in_progress(GameSetup::new().start(Mark::O).settle());
        assert_eq!(game.history(), &[Move::new(Mark::X, Position::Center)]);
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_settle_waits_for_human() {
        let game = in_progress(GameSetup::new().start(Mark::X).settle());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_ai_move_out_of_turn() {
        let game = GameSetup::new().start(Mark::X);
        assert_eq!(game.ai_move(), Err(MoveError::WrongPlayer(Mark::O)));
    }

    #[test]
    fn test_replay_rejects_moves_after_finish() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
            Move::new(Mark::O, Position::BottomRight),
        ];
        assert_eq!(GameInProgress::replay(Mark::X, &moves), Err(MoveError::GameOver));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_winning_move_checks_invariants() {
        // X and O marks on the board with no history behind them.
        let mut game = GameSetup::new().start(Mark::X);
        game.board = Board::from([
            Some(Mark::X),
            Some(Mark::X),
            None,
            Some(Mark::O),
            Some(Mark::O),
            None,
            None,
            None,
            None,
        ]);
        assert!(matches!(
            game.make_move(Move::new(Mark::X, Position::TopRight)),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_finished_restart_keeps_strategy() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
        ];
        let Ok(GameResult::Finished(game)) = GameInProgress::replay(Mark::O, &moves) else {
            panic!("Expected finished game");
        };
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.restart(), GameSetup::new());
    }
}
