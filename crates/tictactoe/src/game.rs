//! Game state and the board engine.
//!
//! A [`GameState`] is an immutable-per-call snapshot: [`GameState::apply`]
//! validates a move and returns the successor state, leaving the original
//! untouched. The driver owns the current value and may keep older ones
//! around for undo or replay.

use super::action::{IllegalMoveError, Move};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, Cell, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of a game, terminal or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A symbol completed a line.
    Won(Symbol),
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(*symbol),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) first: Symbol,
    pub(crate) to_move: Symbol,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates an empty game with `first` to move.
    #[instrument]
    pub fn new(first: Symbol) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol that moved first.
    pub fn first(&self) -> Symbol {
        self.first
    }

    /// Returns the symbol whose turn it is.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Returns the stored outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Every empty cell paired with the symbol to move, by ascending index.
    ///
    /// Empty once the game is terminal.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board
            .empty_positions()
            .map(|pos| Move::new(self.to_move, pos))
            .collect()
    }

    /// Evaluates the board: the first completed line wins, then a full board
    /// draws, otherwise the game is in progress.
    #[instrument(skip(self))]
    pub fn terminal_status(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(&self.board) {
            Outcome::Won(winner)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Applies a move, returning the successor state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the game is over, the symbol is not
    /// the one to move, or the cell is occupied.
    #[instrument(skip(self), fields(to_move = %self.to_move, moves = self.history.len()))]
    pub fn apply(&self, action: Move) -> Result<GameState, IllegalMoveError> {
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board
            .set(action.position, Cell::Occupied(action.symbol));
        next.history.push(action);
        next.to_move = action.symbol.opponent();
        next.outcome = next.terminal_status();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, outcome = %next.outcome, "Move applied");
        Ok(next)
    }

    /// Rebuilds a game by applying `moves` from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMoveError`] encountered.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first: Symbol, moves: &[Move]) -> Result<GameState, IllegalMoveError> {
        moves
            .iter()
            .try_fold(GameState::new(first), |state, action| state.apply(*action))
    }

    /// Returns the state before the last move, or `None` on a fresh game.
    #[instrument(skip(self))]
    pub fn undo(&self) -> Option<GameState> {
        let (_, earlier) = self.history.split_last()?;
        // History only ever holds accepted moves, so replay cannot fail.
        GameState::replay(self.first, earlier).ok()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Symbol::X)
    }
}

/// Every legal move for the symbol to move. See [`GameState::legal_moves`].
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

/// Applies a move. See [`GameState::apply`].
///
/// # Errors
///
/// Returns [`IllegalMoveError`] for an illegal move.
pub fn apply(state: &GameState, action: Move) -> Result<GameState, IllegalMoveError> {
    state.apply(action)
}

/// Evaluates a state. See [`GameState::terminal_status`].
pub fn terminal_status(state: &GameState) -> Outcome {
    state.terminal_status()
}
