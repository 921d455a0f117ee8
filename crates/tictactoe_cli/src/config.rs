//! Game settings: defaults, TOML file, command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tictactoe::{PolicyKind, Symbol};
use tracing::{debug, info, instrument};

/// Who controls each symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two people share the prompt.
    HumanVsHuman,
    /// One person against the computer.
    HumanVsComputer,
    /// The computer plays both sides.
    ComputerVsComputer,
}

/// Which kind of participant moves for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Moves come from the prompt.
    Human,
    /// Moves come from the configured policy.
    Computer,
}

impl Mode {
    /// Returns who controls `symbol`, given the human's symbol in
    /// human-vs-computer games.
    pub fn controller(self, symbol: Symbol, human: Symbol) -> Controller {
        match self {
            Mode::HumanVsHuman => Controller::Human,
            Mode::ComputerVsComputer => Controller::Computer,
            Mode::HumanVsComputer if symbol == human => Controller::Human,
            Mode::HumanVsComputer => Controller::Computer,
        }
    }

    /// True when at least one side is played from the prompt.
    pub fn has_human(self) -> bool {
        !matches!(self, Mode::ComputerVsComputer)
    }
}

/// Input that does not name a mode.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Unknown mode {input:?} (expected human-vs-human, human-vs-computer or computer-vs-computer)"
)]
pub struct ParseModeError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Accepts the kebab-case name, a short form (`hvh`, `hvc`, `cvc`) or
    /// the menu number (1-3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" | "hvh" | "1" => Ok(Mode::HumanVsHuman),
            "human-vs-computer" | "hvc" | "2" => Ok(Mode::HumanVsComputer),
            "computer-vs-computer" | "cvc" | "3" => Ok(Mode::ComputerVsComputer),
            _ => Err(ParseModeError {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Settings for a game session.
///
/// `first_player` and `mode` may be left unset, in which case the driver
/// asks for them at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Symbol that moves first.
    first_player: Option<Symbol>,

    /// Who plays which side.
    mode: Option<Mode>,

    /// Symbol the human plays in human-vs-computer games.
    human_symbol: Symbol,

    /// Computer opponent.
    policy: PolicyKind,

    /// Print the welcome text before the first prompt.
    show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_player: None,
            mode: None,
            human_symbol: Symbol::X,
            policy: PolicyKind::default(),
            show_banner: true,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--first`
    pub first_player: Option<Symbol>,
    /// `--mode`
    pub mode: Option<Mode>,
    /// `--human`
    pub human_symbol: Option<Symbol>,
    /// `--policy`
    pub policy: Option<PolicyKind>,
    /// `--no-banner`
    pub hide_banner: bool,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(first) = overrides.first_player {
            self.first_player = Some(first);
        }
        if let Some(mode) = overrides.mode {
            self.mode = Some(mode);
        }
        if let Some(human) = overrides.human_symbol {
            self.human_symbol = human;
        }
        if let Some(policy) = overrides.policy {
            self.policy = policy;
        }
        if overrides.hide_banner {
            self.show_banner = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mode_parses_its_display() {
        for mode in Mode::iter() {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("HVC".parse::<Mode>(), Ok(Mode::HumanVsComputer));
        assert_eq!("3".parse::<Mode>(), Ok(Mode::ComputerVsComputer));
        assert!("solo".parse::<Mode>().is_err());
    }

    #[test]
    fn test_controller_assignment() {
        let mode = Mode::HumanVsComputer;
        assert_eq!(mode.controller(Symbol::O, Symbol::O), Controller::Human);
        assert_eq!(mode.controller(Symbol::X, Symbol::O), Controller::Computer);
        assert_eq!(
            Mode::HumanVsHuman.controller(Symbol::X, Symbol::O),
            Controller::Human
        );
        assert_eq!(
            Mode::ComputerVsComputer.controller(Symbol::O, Symbol::O),
            Controller::Computer
        );
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(Overrides {
            first_player: Some(Symbol::O),
            mode: Some(Mode::HumanVsComputer),
            human_symbol: None,
            policy: Some(PolicyKind::Minimax),
            hide_banner: true,
        });
        assert_eq!(settings.first_player(), &Some(Symbol::O));
        assert_eq!(settings.mode(), &Some(Mode::HumanVsComputer));
        assert_eq!(settings.human_symbol(), &Symbol::X);
        assert_eq!(settings.policy(), &PolicyKind::Minimax);
        assert!(!settings.show_banner());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
