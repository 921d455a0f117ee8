//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe::{GameState, Move};

/// What a player wants to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Place a mark.
    Play(Move),
    /// Take back the last move (human games only).
    Undo,
    /// Leave the game.
    Quit,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets the next action from this player.
    ///
    /// Human players read from `input` and prompt on `output`; computer
    /// players only announce their choice.
    fn get_move(
        &mut self,
        state: &GameState,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when illegal moves should be re-prompted rather than treated
    /// as a defect.
    fn is_human(&self) -> bool;
}
