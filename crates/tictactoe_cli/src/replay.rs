//! Non-interactive replay of a recorded move list.

use crate::render;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe::{GameState, Move, Position, Symbol};
use tracing::{debug, instrument};

/// Plays `moves` from an empty board, alternating symbols from `first`.
///
/// Moves are cell numbers (1-9) or names, separated by commas or
/// whitespace.
#[instrument]
pub fn replay(first: Symbol, moves: &str) -> Result<GameState> {
    let mut state = GameState::new(first);
    let tokens = moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for (number, token) in tokens.enumerate() {
        let position = Position::parse_input(token)
            .with_context(|| format!("Move {} is not a cell", number + 1))?;
        let action = Move::new(state.to_move(), position);
        state = state
            .apply(action)
            .with_context(|| format!("Move {} ({}) rejected", number + 1, action))?;
        debug!(%action, "Replayed");
    }

    Ok(state)
}

/// Writes the replayed game as a board and verdict, or as JSON.
pub fn report(state: &GameState, json: bool, output: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *output, state)
            .context("Failed to serialize game state")?;
        writeln!(output)?;
        return Ok(());
    }

    write!(output, "{}", render::board(state.board()))?;
    if state.is_terminal() {
        writeln!(output, "{}", render::announcement(state.outcome()))?;
    } else {
        writeln!(
            output,
            "{} to move. Open cells: {}",
            state.to_move(),
            render::open_cells(state)
        )?;
    }
    Ok(())
}
