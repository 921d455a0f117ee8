//! Terminal driver for the `tictactoe` engine.
//!
//! Wires settings, prompts and players around a [`tictactoe::GameState`].
//! Everything reads from a [`BufRead`] and writes to a [`Write`] so whole
//! sessions can be scripted.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod orchestrator;
pub mod players;
pub mod render;
mod replay;
pub mod setup;

pub use config::{ConfigError, Controller, Mode, Overrides, ParseModeError, Settings};
pub use orchestrator::{GameEnd, Orchestrator};
pub use replay::{replay, report};

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Runs one interactive session: banner, setup questions, then the game.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> Result<GameEnd> {
    if *settings.show_banner() {
        writeln!(output, "{}", render::BANNER)?;
    }

    let Some(setup) = setup::resolve(settings, &mut input, &mut output)? else {
        info!("Input ended during setup");
        return Ok(GameEnd::Abandoned);
    };

    let (player_x, player_o) = setup::players(&setup, settings);
    let mut orchestrator = Orchestrator::new(setup.first, player_x, player_o, input, output);
    orchestrator.run()
}
