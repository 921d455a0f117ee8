//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{IllegalMoveError, Move};
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), IllegalMoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`IllegalMoveError::GameOver`] on a terminal state.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IllegalMoveError> {
        if game.is_terminal() {
            Err(IllegalMoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the symbol's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`IllegalMoveError::WrongTurn`] when the symbol is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMoveError> {
        if mov.symbol != game.to_move() {
            Err(IllegalMoveError::WrongTurn(mov.symbol))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`IllegalMoveError::CellOccupied`] when the cell is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMoveError> {
        if !game.board().is_empty(mov.position) {
            Err(IllegalMoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: game running, symbol to move, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), IllegalMoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Symbol is the one to move
/// - Cell is empty
///
/// Postconditions:
/// - Board is monotonic
/// - Turns alternate from the first mover
/// - Stored outcome matches the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), IllegalMoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), IllegalMoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            IllegalMoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
