//! Computer player backed by an opponent policy.

use super::{Player, Turn};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe::{GameState, Policy, Symbol};
use tracing::{debug, instrument};

/// Computer player.
pub struct ComputerPlayer {
    name: String,
    symbol: Symbol,
    policy: Box<dyn Policy>,
}

impl ComputerPlayer {
    /// Creates a computer player for `symbol`.
    pub fn new(name: impl Into<String>, symbol: Symbol, policy: Box<dyn Policy>) -> Self {
        Self {
            name: name.into(),
            symbol,
            policy,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, policy = self.policy.name()))]
    fn get_move(
        &mut self,
        state: &GameState,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Turn> {
        let action = self
            .policy
            .choose_move(state, self.symbol)
            .with_context(|| format!("{} could not choose a move", self.name))?;
        debug!(%action, "Computer chose move");
        writeln!(
            output,
            "{} ({}) plays {} ({})",
            self.name,
            self.symbol,
            action.index() + 1,
            action.position
        )?;
        Ok(Turn::Play(action))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        false
    }
}
