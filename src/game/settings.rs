//! Game settings
//!
//! Validated parameters for a batch of games.

use crate::agents::{AgentKind, GameSetup};
use crate::core::{Alphabet, CodeError};
use crate::solver::CodeSpace;
use clap::ValueEnum;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_CODE_LENGTH: usize = 5;
pub const DEFAULT_COLOURS: usize = 6;
pub const DEFAULT_MAX_GUESSES: usize = 10;
pub const DEFAULT_GAMES: usize = 100;

/// Mixed into the game seed when no solver seed is given
const SOLVER_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// What to do when an agent breaks the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Abort the run on the first violation
    #[default]
    Strict,
    /// Score the game as a loss and keep going
    Tournament,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Tournament => write!(f, "tournament"),
        }
    }
}

/// Error type for unusable settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Code(CodeError),
    NoGuesses,
    NoGames,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(e) => write!(f, "{e}"),
            Self::NoGuesses => write!(f, "At least one guess per game is required"),
            Self::NoGames => write!(f, "At least one game is required"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<CodeError> for SettingsError {
    fn from(e: CodeError) -> Self {
        Self::Code(e)
    }
}

/// Parameters of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub code_length: usize,
    pub colours: usize,
    pub max_guesses: usize,
    pub games: usize,
    /// Seed for target generation, `None` for time-based
    pub seed: Option<u64>,
    /// Seed for the agent's own randomness, `None` to derive from the game seed
    pub solver_seed: Option<u64>,
    pub policy: ErrorPolicy,
    pub agent: AgentKind,
    pub verbose: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            colours: DEFAULT_COLOURS,
            max_guesses: DEFAULT_MAX_GUESSES,
            games: DEFAULT_GAMES,
            seed: None,
            solver_seed: None,
            policy: ErrorPolicy::Strict,
            agent: AgentKind::Elimination,
            verbose: false,
        }
    }
}

impl GameSettings {
    /// Check the settings and build the setup handed to agents
    ///
    /// # Errors
    /// Returns `SettingsError` for an empty code, an unsupported number of
    /// colours, a zero guess budget or game count, or (for the elimination
    /// agent) a code space too large to enumerate.
    pub fn validate(&self) -> Result<GameSetup, SettingsError> {
        if self.code_length == 0 {
            return Err(CodeError::EmptyCode.into());
        }
        let alphabet = Alphabet::new(self.colours)?;
        if self.max_guesses == 0 {
            return Err(SettingsError::NoGuesses);
        }
        if self.games == 0 {
            return Err(SettingsError::NoGames);
        }
        if self.agent == AgentKind::Elimination
            && CodeSpace::size_of(self.colours, self.code_length).is_none()
        {
            return Err(CodeError::SpaceTooLarge {
                colours: self.colours,
                length: self.code_length,
            }
            .into());
        }

        Ok(GameSetup {
            code_length: self.code_length,
            alphabet,
            max_guesses: self.max_guesses,
        })
    }

    /// Seed for target generation: the configured one, else the current UNIX time
    #[must_use]
    pub fn game_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs())
        })
    }

    /// Seed for the agent, derived from `game_seed` unless set explicitly
    #[must_use]
    pub fn solver_seed(&self, game_seed: u64) -> u64 {
        self.solver_seed.unwrap_or(game_seed ^ SOLVER_SEED_MIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let setup = GameSettings::default().validate().unwrap();
        assert_eq!(setup.code_length, 5);
        assert_eq!(setup.alphabet.len(), 6);
        assert_eq!(setup.max_guesses, 10);
    }

    #[test]
    fn rejects_bad_values() {
        let too_many_colours = GameSettings {
            colours: 7,
            ..GameSettings::default()
        };
        assert_eq!(
            too_many_colours.validate(),
            Err(SettingsError::Code(CodeError::InvalidAlphabetSize(7)))
        );

        let empty = GameSettings {
            code_length: 0,
            ..GameSettings::default()
        };
        assert_eq!(
            empty.validate(),
            Err(SettingsError::Code(CodeError::EmptyCode))
        );

        let no_guesses = GameSettings {
            max_guesses: 0,
            ..GameSettings::default()
        };
        assert_eq!(no_guesses.validate(), Err(SettingsError::NoGuesses));

        let no_games = GameSettings {
            games: 0,
            ..GameSettings::default()
        };
        assert_eq!(no_games.validate(), Err(SettingsError::NoGames));
    }

    #[test]
    fn space_limit_only_for_elimination() {
        let huge = GameSettings {
            code_length: 12,
            ..GameSettings::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(SettingsError::Code(CodeError::SpaceTooLarge { .. }))
        ));

        let random = GameSettings {
            agent: AgentKind::Random,
            ..huge
        };
        assert!(random.validate().is_ok());
    }

    #[test]
    fn seeds() {
        let fixed = GameSettings {
            seed: Some(42),
            ..GameSettings::default()
        };
        assert_eq!(fixed.game_seed(), 42);
        assert_eq!(fixed.solver_seed(42), 42 ^ SOLVER_SEED_MIX);

        let explicit = GameSettings {
            solver_seed: Some(7),
            ..fixed
        };
        assert_eq!(explicit.solver_seed(42), 7);
    }
}
