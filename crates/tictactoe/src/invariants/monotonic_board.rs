//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, GameState};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.symbol));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
