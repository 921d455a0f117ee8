//! Alternating turn invariant: symbols alternate starting with the first mover.

use super::Invariant;
use crate::GameState;

/// Invariant: Symbols alternate turns.
///
/// - History starts with the first mover and never repeats a symbol twice
///   in a row.
/// - `to_move` is the first mover after an even number of moves, the other
///   symbol after an odd number.
/// - The board holds as many first-mover symbols as second-mover symbols,
///   or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let first = game.first();
        let history = game.history();

        if let Some(opening) = history.first()
            && opening.symbol != first
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].symbol == w[1].symbol) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };
        if game.to_move() != expected_next {
            return false;
        }

        let leads = game.board().count(first);
        let trails = game.board().count(first.opponent());
        leads == trails || leads == trails + 1
    }

    fn description() -> &'static str {
        "Symbols alternate turns starting with the first mover"
    }
}
