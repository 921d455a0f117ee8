//! Pre-game questions: who starts and who plays.

use crate::config::{Controller, Mode, Settings};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe::Symbol;
use tracing::{debug, instrument};

/// Answers needed before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    /// Symbol that moves first.
    pub first: Symbol,
    /// Who plays which side.
    pub mode: Mode,
}

/// Fills in whatever the settings leave open by asking at the prompt.
///
/// Returns `None` if input ends before every question is answered.
#[instrument(skip_all)]
pub fn resolve(
    settings: &Settings,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Option<Setup>> {
    let first = match settings.first_player() {
        Some(first) => *first,
        None => match ask::<Symbol>(
            "Type X if player X is to go first, or O if player O is to go first: ",
            input,
            output,
        )? {
            Some(first) => first,
            None => return Ok(None),
        },
    };

    let mode = match settings.mode() {
        Some(mode) => *mode,
        None => match ask::<Mode>(
            "Choose a mode: 1) human vs human, 2) human vs computer, 3) computer vs computer: ",
            input,
            output,
        )? {
            Some(mode) => mode,
            None => return Ok(None),
        },
    };

    debug!(%first, %mode, "Setup resolved");
    Ok(Some(Setup { first, mode }))
}

/// Repeats `question` until the answer parses.
fn ask<T>(question: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        write!(output, "{}", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read answer")? == 0 {
            writeln!(output)?;
            return Ok(None);
        }
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Builds the X and O players for a session.
pub fn players(setup: &Setup, settings: &Settings) -> (Box<dyn Player>, Box<dyn Player>) {
    let human = *settings.human_symbol();
    let make = |symbol: Symbol| -> Box<dyn Player> {
        let name = match (setup.mode, setup.mode.controller(symbol, human)) {
            (Mode::HumanVsHuman, _) => format!("Player {}", symbol),
            (Mode::ComputerVsComputer, _) => format!("Computer {}", symbol),
            (Mode::HumanVsComputer, Controller::Human) => "Player".to_string(),
            (Mode::HumanVsComputer, Controller::Computer) => "Computer".to_string(),
        };
        match setup.mode.controller(symbol, human) {
            Controller::Human => Box::new(HumanPlayer::new(name, symbol)),
            Controller::Computer => {
                Box::new(ComputerPlayer::new(name, symbol, settings.policy().build()))
            }
        }
    };
    (make(Symbol::X), make(Symbol::O))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;
    use std::io::Cursor;

    fn run(settings: &Settings, script: &str) -> (Option<Setup>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::<u8>::new();
        let setup = resolve(settings, &mut input, &mut output).expect("io works");
        (setup, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn test_asks_for_missing_answers() {
        let (setup, out) = run(&Settings::default(), "z\no\n2\n");
        assert_eq!(
            setup,
            Some(Setup {
                first: Symbol::O,
                mode: Mode::HumanVsComputer,
            })
        );
        assert!(out.contains("Unknown symbol \"z\""));
    }

    #[test]
    fn test_configured_answers_skip_prompts() {
        let settings = Settings::default().with_overrides(Overrides {
            first_player: Some(Symbol::X),
            mode: Some(Mode::HumanVsHuman),
            ..Overrides::default()
        });
        let (setup, out) = run(&settings, "");
        assert_eq!(
            setup,
            Some(Setup {
                first: Symbol::X,
                mode: Mode::HumanVsHuman,
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_end_of_input_gives_up() {
        let (setup, _) = run(&Settings::default(), "x\n");
        assert_eq!(setup, None);
    }

    #[test]
    fn test_player_roles() {
        let settings = Settings::default().with_overrides(Overrides {
            human_symbol: Some(Symbol::O),
            ..Overrides::default()
        });
        let setup = Setup {
            first: Symbol::X,
            mode: Mode::HumanVsComputer,
        };
        let (x, o) = players(&setup, &settings);
        assert!(!x.is_human());
        assert_eq!(x.name(), "Computer");
        assert!(o.is_human());
        assert_eq!(o.name(), "Player");
    }
}
