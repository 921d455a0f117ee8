//! Tic-tac-toe game logic.
//!
//! The crate is I/O free. It provides:
//!
//! - **Board engine**: [`GameState`] with [`legal_moves`], [`apply`] and
//!   [`terminal_status`], validated by [`contracts`] and checked against
//!   [`invariants`].
//! - **Opponent policies**: [`Heuristic`] and [`Minimax`] behind the
//!   [`Policy`] trait, with [`choose_move`] as the default entry point.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Move, Outcome, Position, Symbol, choose_move};
//!
//! let game = GameState::new(Symbol::X);
//! let game = game.apply(Move::new(Symbol::X, Position::TopLeft))?;
//! let reply = choose_move(&game, Symbol::O)?;
//! assert_eq!(reply.position, Position::Center);
//! assert_eq!(game.apply(reply)?.outcome(), Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod policy;
mod position;
pub mod rules;
mod types;

pub use action::{IllegalMoveError, Move, PreconditionError};
pub use game::{GameState, Outcome, apply, legal_moves, terminal_status};
pub use invariants::{
    AlternatingTurnInvariant, ConsistentOutcomeInvariant, GameInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use policy::{Heuristic, Minimax, ParsePolicyError, Policy, PolicyKind, choose_move};
pub use position::{ParsePositionError, Position};
pub use types::{Board, Cell, ParseSymbolError, Symbol};
