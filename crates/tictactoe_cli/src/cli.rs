//! Command-line interface for the tic-tac-toe driver.

use crate::config::{Mode, Overrides};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{PolicyKind, Symbol};

/// Tic-tac-toe at the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (ignored if missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play(PlayArgs),

    /// Replay a recorded move list and print the result
    Replay {
        /// Cells in order, e.g. "5,1,9" or "center top-left"
        moves: String,

        /// Symbol that made the first move
        #[arg(long, default_value = "X")]
        first: Symbol,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for an interactive game. Unset values fall back to the
/// settings file, then to a prompt.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Symbol that moves first (X or O)
    #[arg(long)]
    pub first: Option<Symbol>,

    /// human-vs-human, human-vs-computer or computer-vs-computer
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Symbol the human plays against the computer
    #[arg(long)]
    pub human: Option<Symbol>,

    /// Computer opponent (heuristic or minimax)
    #[arg(long)]
    pub policy: Option<PolicyKind>,

    /// Skip the welcome text
    #[arg(long)]
    pub no_banner: bool,
}

impl From<PlayArgs> for Overrides {
    fn from(args: PlayArgs) -> Self {
        Self {
            first_player: args.first,
            mode: args.mode,
            human_symbol: args.human,
            policy: args.policy,
            hide_banner: args.no_banner,
        }
    }
}
