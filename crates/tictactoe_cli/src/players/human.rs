//! Human player reading moves from a text prompt.

use super::{Player, Turn};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe::{GameState, Move, Position, Symbol};
use tracing::{debug, instrument};

/// Human player at the prompt.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    name: String,
    symbol: Symbol,
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(
        &mut self,
        _state: &GameState,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Turn> {
        loop {
            write!(output, "{} ({}), enter a move: ", self.name, self.symbol)?;
            output.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read move")?;
            if read == 0 {
                debug!("Input closed");
                writeln!(output)?;
                return Ok(Turn::Quit);
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "undo" | "u" => return Ok(Turn::Undo),
                "quit" | "q" | "exit" => return Ok(Turn::Quit),
                _ => {}
            }

            match Position::parse_input(&line) {
                Ok(pos) => return Ok(Turn::Play(Move::new(self.symbol, pos))),
                Err(e) => {
                    debug!(error = %e, "Unparseable move");
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(script: &str) -> (Turn, String) {
        let mut player = HumanPlayer::new("Player X".to_string(), Symbol::X);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::<u8>::new();
        let turn = player
            .get_move(&GameState::new(Symbol::X), &mut input, &mut output)
            .expect("io works");
        (turn, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn test_reads_number() {
        let (turn, _) = ask("5\n");
        assert_eq!(turn, Turn::Play(Move::new(Symbol::X, Position::Center)));
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let (turn, out) = ask("banana\ntop right\n");
        assert_eq!(turn, Turn::Play(Move::new(Symbol::X, Position::TopRight)));
        assert!(out.contains("Unknown position \"banana\""));
        assert_eq!(out.matches("enter a move").count(), 2);
    }

    #[test]
    fn test_commands() {
        assert_eq!(ask("undo\n").0, Turn::Undo);
        assert_eq!(ask("Q\n").0, Turn::Quit);
        assert_eq!(ask("").0, Turn::Quit);
    }
}
