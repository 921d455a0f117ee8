//! Game orchestration between players.

use crate::players::{Player, Turn};
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe::{GameState, Outcome, Symbol};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Played to a win or a draw.
    Finished(Outcome),
    /// A player quit or input ran out.
    Abandoned,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<R, W> {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator for a fresh game with `first` to move.
    pub fn new(
        first: Symbol,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            game: GameState::new(first),
            player_x,
            player_o,
            input,
            output,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop until the game ends or a player quits.
    #[instrument(skip(self), fields(first = %self.game.first()))]
    pub fn run(&mut self) -> Result<GameEnd> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game"
        );

        loop {
            if self.game.is_terminal() {
                let outcome = self.game.outcome();
                write!(self.output, "\n{}", render::board(self.game.board()))?;
                writeln!(self.output, "{}", render::announcement(outcome))?;
                info!(%outcome, moves = self.game.history().len(), "Game over");
                return Ok(GameEnd::Finished(outcome));
            }

            write!(self.output, "\n{}", render::board(self.game.board()))?;
            writeln!(self.output, "Open cells: {}", render::open_cells(&self.game))?;

            let player = match self.game.to_move() {
                Symbol::X => &mut self.player_x,
                Symbol::O => &mut self.player_o,
            };
            let is_human = player.is_human();
            debug!(player = player.name(), "Waiting for move");
            let turn = player.get_move(&self.game, &mut self.input, &mut self.output)?;

            match turn {
                Turn::Quit => {
                    writeln!(self.output, "Goodbye.")?;
                    info!("Game abandoned");
                    return Ok(GameEnd::Abandoned);
                }
                Turn::Undo => self.undo()?,
                Turn::Play(action) => match self.game.apply(action) {
                    Ok(next) => self.game = next,
                    Err(e) if is_human => {
                        debug!(error = %e, "Rejected human move");
                        writeln!(self.output, "Illegal move: {}", e)?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Computer produced an illegal move");
                        return Err(e).context("Computer player made an illegal move");
                    }
                },
            }
        }
    }

    fn is_human(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::X => self.player_x.is_human(),
            Symbol::O => self.player_o.is_human(),
        }
    }

    /// Rewinds to the previous position where a human is to move.
    fn undo(&mut self) -> Result<()> {
        let mut candidate = self.game.undo();
        while let Some(state) = candidate.take() {
            if self.is_human(state.to_move()) {
                candidate = Some(state);
                break;
            }
            candidate = state.undo();
        }

        let Some(state) = candidate else {
            writeln!(self.output, "Nothing to undo.")?;
            return Ok(());
        };
        debug!(
            from = self.game.history().len(),
            to = state.history().len(),
            "Undo"
        );
        self.game = state;
        writeln!(self.output, "Move taken back.")?;
        Ok(())
    }
}
