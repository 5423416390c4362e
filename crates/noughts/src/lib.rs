//! Noughts - tic-tac-toe against the computer.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`evaluate`], [`check_winner`])
//! - **AI**: opening preference with a minimax fallback ([`select_move`], [`Strategy`])
//! - **Typestate**: setup, in-progress and finished games as distinct types
//! - **Session**: the value a UI layer holds; side selection, human moves,
//!   computer replies and restart
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Outcome, Session};
//!
//! let session = Session::new().select_side(Mark::O);
//! // The computer plays X and has already opened in the center.
//! assert_eq!(session.board().squares()[4], noughts::Square::Occupied(Mark::X));
//!
//! let session = session.apply_human_move(0);
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! assert_eq!(session.status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod contracts;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod session;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use ai::{Strategy, best_move, minimax, select_move};
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate, is_draw, is_full};
pub use session::Session;
pub use types::{Board, Mark, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
