//! Consistent outcome invariant: the stored outcome matches the board.

use super::Invariant;
use crate::GameState;

/// Invariant: The stored outcome equals a fresh evaluation of the board.
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameState> for ConsistentOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        game.outcome() == game.terminal_status()
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}
