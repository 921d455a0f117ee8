//! Computer opponents.
//!
//! A [`Policy`] picks a move for its own symbol. Two are provided:
//! [`Heuristic`], a fixed priority list that never misses an immediate win
//! or block, and [`Minimax`], an exhaustive search that never loses.

mod heuristic;
mod minimax;

pub use heuristic::Heuristic;
pub use minimax::Minimax;

use crate::{GameState, Move, PreconditionError, Symbol};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Move selection for an automated participant.
pub trait Policy {
    /// Chooses a move for `own` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when the game is over or `own` is not
    /// the symbol to move.
    fn choose_move(&self, state: &GameState, own: Symbol) -> Result<Move, PreconditionError>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Which policy drives the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyKind {
    /// Win, block, center, corner, edge.
    #[default]
    Heuristic,
    /// Exhaustive game-tree search.
    Minimax,
}

impl PolicyKind {
    /// Builds the policy this kind names.
    pub fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Heuristic => Box::new(Heuristic),
            PolicyKind::Minimax => Box::new(Minimax),
        }
    }
}

/// Input that does not name a policy.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown policy {input:?} (expected heuristic or minimax)")]
pub struct ParsePolicyError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(PolicyKind::Heuristic),
            "minimax" => Ok(PolicyKind::Minimax),
            _ => Err(ParsePolicyError {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Chooses a move with the default [`Heuristic`] policy.
///
/// # Errors
///
/// Returns [`PreconditionError`] when called out of turn or after the game
/// has ended.
pub fn choose_move(state: &GameState, own: Symbol) -> Result<Move, PreconditionError> {
    Heuristic.choose_move(state, own)
}

/// Shared entry check for every policy.
#[instrument(skip(state), fields(to_move = %state.to_move()))]
pub(crate) fn ensure_turn(state: &GameState, own: Symbol) -> Result<(), PreconditionError> {
    if state.is_terminal() {
        warn!("Policy asked to move after game over");
        return Err(PreconditionError::GameOver);
    }
    if state.to_move() != own {
        warn!("Policy asked to move out of turn");
        return Err(PreconditionError::NotYourTurn {
            requested: own,
            to_move: state.to_move(),
        });
    }
    Ok(())
}
