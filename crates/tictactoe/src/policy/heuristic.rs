//! Priority-list opponent.

use super::{Policy, ensure_turn};
use crate::rules::completing_position;
use crate::{GameState, Move, Position, PreconditionError, Symbol};
use tracing::{debug, instrument};

/// Deterministic rule-of-thumb opponent.
///
/// In order: complete own line, block the opponent's line, take the
/// center, take a corner (top-left, top-right, bottom-left, bottom-right),
/// take the lowest edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Policy for Heuristic {
    #[instrument(skip(self, state), fields(policy = "heuristic"))]
    fn choose_move(&self, state: &GameState, own: Symbol) -> Result<Move, PreconditionError> {
        ensure_turn(state, own)?;
        let board = state.board();

        let (position, reason) = if let Some(pos) = completing_position(board, own) {
            (pos, "win")
        } else if let Some(pos) = completing_position(board, own.opponent()) {
            (pos, "block")
        } else if board.is_empty(Position::CENTER) {
            (Position::CENTER, "center")
        } else if let Some(pos) = Position::CORNERS.into_iter().find(|p| board.is_empty(*p)) {
            (pos, "corner")
        } else if let Some(pos) = Position::EDGES.into_iter().find(|p| board.is_empty(*p)) {
            (pos, "edge")
        } else {
            // A non-terminal board always has an empty cell.
            return Err(PreconditionError::GameOver);
        };

        debug!(%position, reason, "Heuristic chose move");
        Ok(Move::new(own, position))
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
