//! Exhaustive game-tree opponent.

use super::{Policy, ensure_turn};
use crate::rules::{check_winner, completing_position, is_full};
use crate::{Board, GameState, Move, PreconditionError, Symbol};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Perfect-play opponent.
///
/// Takes an immediate win, then blocks an immediate loss, then searches the
/// full game tree with negamax. Scores favour faster wins and slower
/// losses. Equal scores go to the lowest cell index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

/// Memo of negamax values keyed by board and symbol to move.
type Table = HashMap<(Board, Symbol), i8>;

impl Minimax {
    /// Negamax value of `board` for `to_move`.
    ///
    /// A win scores `10 - filled`, so values depend only on the board and
    /// can be memoised across move orders.
    fn negamax(board: &Board, to_move: Symbol, table: &mut Table) -> i8 {
        if let Some(&value) = table.get(&(*board, to_move)) {
            return value;
        }

        let value = if check_winner(board).is_some() {
            // The previous mover completed the line.
            -(10 - board.filled() as i8)
        } else if is_full(board) {
            0
        } else {
            board
                .empty_positions()
                .map(|pos| -Self::negamax(&board.with(pos, to_move), to_move.opponent(), table))
                .max()
                .unwrap_or(0)
        };

        table.insert((*board, to_move), value);
        value
    }
}

impl Policy for Minimax {
    #[instrument(skip(self, state), fields(policy = "minimax"))]
    fn choose_move(&self, state: &GameState, own: Symbol) -> Result<Move, PreconditionError> {
        ensure_turn(state, own)?;
        let board = state.board();

        if let Some(pos) = completing_position(board, own) {
            debug!(position = %pos, "Minimax takes the win");
            return Ok(Move::new(own, pos));
        }
        if let Some(pos) = completing_position(board, own.opponent()) {
            debug!(position = %pos, "Minimax blocks");
            return Ok(Move::new(own, pos));
        }

        let mut table = Table::new();
        let mut best = None;
        for pos in board.empty_positions() {
            let value = -Self::negamax(&board.with(pos, own), own.opponent(), &mut table);
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((pos, value));
            }
        }
        debug!(nodes = table.len(), ?best, "Minimax search finished");

        best.map(|(pos, _)| Move::new(own, pos))
            .ok_or(PreconditionError::GameOver)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
