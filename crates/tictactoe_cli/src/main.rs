//! Tic-tac-toe at the terminal.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tictactoe::Symbol;
use tictactoe_cli::cli::{Cli, Command, PlayArgs};
use tictactoe_cli::{GameEnd, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(cli.config, args),
        Command::Replay { moves, first, json } => run_replay(&moves, first, json),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(args))]
fn run_play(config: std::path::PathBuf, args: PlayArgs) -> Result<()> {
    let settings = Settings::load_or_default(&config)?.with_overrides(args.into());
    let end = tictactoe_cli::play(&settings, io::stdin().lock(), io::stdout().lock())?;
    match end {
        GameEnd::Finished(outcome) => info!(%outcome, "Session finished"),
        GameEnd::Abandoned => info!("Session abandoned"),
    }
    Ok(())
}

/// Replay a move list and print the result
#[instrument]
fn run_replay(moves: &str, first: Symbol, json: bool) -> Result<()> {
    let state = tictactoe_cli::replay(first, moves)?;
    let mut stdout = io::stdout().lock();
    tictactoe_cli::report(&state, json, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
