//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! a participant's intent and can be validated independently of execution.

use super::{Position, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }

    /// Creates a move from a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::OutOfRange`] for an index past the board.
    pub fn at_index(index: usize, symbol: Symbol) -> Result<Self, IllegalMoveError> {
        Position::from_index(index)
            .map(|position| Self::new(symbol, position))
            .ok_or(IllegalMoveError::OutOfRange(index))
    }

    /// Returns the symbol of this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the board index (0-8) of this move.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// A move the engine refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IllegalMoveError {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The symbol does not match the player to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Symbol),

    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for IllegalMoveError {}

/// The opponent policy was asked to move when it must not.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PreconditionError {
    /// The game is already over.
    #[display("Cannot choose a move: game is already over")]
    GameOver,

    /// The policy's symbol is not the one to move.
    #[display("Cannot choose a move for {requested}: {to_move} is to move")]
    NotYourTurn {
        /// Symbol the policy was asked to play.
        requested: Symbol,
        /// Symbol actually to move.
        to_move: Symbol,
    },
}

impl std::error::Error for PreconditionError {}
