//! Agent contract
//!
//! Defines the Agent trait every guessing policy implements, and the types
//! exchanged with the game engine each turn.

use super::{EliminationAgent, HumanAgent, RandomAgent};
use crate::core::{Alphabet, Code, CodeError, Feedback};
use crate::game::CancelToken;
use crate::solver::SolverError;
use clap::ValueEnum;
use std::fmt;

/// Fixed parameters of a game, handed to an agent once before play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub code_length: usize,
    pub alphabet: Alphabet,
    pub max_guesses: usize,
}

/// What an agent sees at the start of each turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percept {
    /// Number of guesses made so far in this game (0 for the first guess)
    pub turn: usize,
    /// Previous guess, `None` on turn 0
    pub last_guess: Option<Code>,
    pub in_place: usize,
    pub in_colour: usize,
}

impl Percept {
    /// Percept for the first turn of a game
    #[must_use]
    pub const fn opening() -> Self {
        Self {
            turn: 0,
            last_guess: None,
            in_place: 0,
            in_colour: 0,
        }
    }

    /// Percept after `turn` guesses, the last of which was `guess`
    #[must_use]
    pub const fn after(turn: usize, guess: Code, feedback: Feedback) -> Self {
        Self {
            turn,
            last_guess: Some(guess),
            in_place: feedback.in_place,
            in_colour: feedback.in_colour,
        }
    }

    /// Feedback for the previous guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        Feedback::new(self.in_place, self.in_colour)
    }
}

/// An agent's answer to a percept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentMove {
    /// Board symbols of the next guess; validated by the engine
    Guess(Vec<char>),
    /// Give up on the current game
    Abstain,
}

/// Error raised by an agent during its call
#[derive(Debug)]
pub enum AgentError {
    /// `next_guess` called before `initialize`
    NotInitialized,
    /// The agent could not be set up for these game parameters
    Setup(CodeError),
    /// The agent's own bookkeeping contradicts the feedback it received
    Inconsistent(SolverError),
    /// Reading player input failed
    Input(std::io::Error),
    /// Any other agent-specific failure
    Other(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Agent used before initialization"),
            Self::Setup(e) => write!(f, "Agent setup failed: {e}"),
            Self::Inconsistent(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "Failed to read input: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

impl From<std::io::Error> for AgentError {
    fn from(e: std::io::Error) -> Self {
        Self::Input(e)
    }
}

/// A guessing policy
pub trait Agent {
    /// Short name used in reports and error messages
    fn name(&self) -> &'static str;

    /// Prepare for games with the given parameters
    ///
    /// Called once before the first game. Agents may precompute here.
    ///
    /// # Errors
    /// Returns `AgentError` if the agent cannot play with these parameters.
    fn initialize(&mut self, setup: &GameSetup) -> Result<(), AgentError>;

    /// Produce the next guess, or abstain
    ///
    /// A percept with `turn == 0` starts a new game.
    ///
    /// # Errors
    /// Returns `AgentError` if the agent fails during the call.
    fn next_guess(&mut self, percept: &Percept) -> Result<AgentMove, AgentError>;
}

/// Available agent kinds, selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Candidate elimination with expected-partition scoring
    Elimination,
    /// Uniformly random guesses
    Random,
    /// Interactive human player
    Human,
}

/// Enum wrapper for all agent types
///
/// Allows runtime selection of the agent while maintaining static dispatch.
pub enum AgentType {
    Elimination(EliminationAgent),
    Random(RandomAgent),
    Human(HumanAgent),
}

impl AgentType {
    /// Build an agent of the given kind
    ///
    /// `seed` drives the agent's own random source. Human agents read raw
    /// keystrokes and can cancel the run through `cancel`.
    #[must_use]
    pub fn build(kind: AgentKind, seed: u64, cancel: &CancelToken, plain: bool) -> Self {
        match kind {
            AgentKind::Elimination => Self::Elimination(EliminationAgent::new(seed)),
            AgentKind::Random => Self::Random(RandomAgent::new(seed)),
            AgentKind::Human => Self::Human(HumanAgent::keyboard(cancel.clone(), plain)),
        }
    }
}

impl Agent for AgentType {
    fn name(&self) -> &'static str {
        match self {
            Self::Elimination(a) => a.name(),
            Self::Random(a) => a.name(),
            Self::Human(a) => a.name(),
        }
    }

    fn initialize(&mut self, setup: &GameSetup) -> Result<(), AgentError> {
        match self {
            Self::Elimination(a) => a.initialize(setup),
            Self::Random(a) => a.initialize(setup),
            Self::Human(a) => a.initialize(setup),
        }
    }

    fn next_guess(&mut self, percept: &Percept) -> Result<AgentMove, AgentError> {
        match self {
            Self::Elimination(a) => a.next_guess(percept),
            Self::Random(a) => a.next_guess(percept),
            Self::Human(a) => a.next_guess(percept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_percept_is_neutral() {
        let percept = Percept::opening();
        assert_eq!(percept.turn, 0);
        assert!(percept.last_guess.is_none());
        assert_eq!(percept.feedback(), Feedback::new(0, 0));
    }

    #[test]
    fn percept_after_guess() {
        let alphabet = Alphabet::new(2).unwrap();
        let guess = Code::parse("BB", &alphabet, 2).unwrap();
        let percept = Percept::after(1, guess.clone(), Feedback::new(1, 0));

        assert_eq!(percept.turn, 1);
        assert_eq!(percept.last_guess, Some(guess));
        assert_eq!(percept.in_place, 1);
        assert_eq!(percept.in_colour, 0);
    }

    #[test]
    fn build_selects_kind() {
        let cancel = CancelToken::new();
        assert_eq!(
            AgentType::build(AgentKind::Elimination, 1, &cancel, true).name(),
            "elimination"
        );
        assert_eq!(
            AgentType::build(AgentKind::Random, 1, &cancel, true).name(),
            "random"
        );
        assert_eq!(
            AgentType::build(AgentKind::Human, 1, &cancel, true).name(),
            "human"
        );
    }

    #[test]
    fn agent_error_display() {
        assert_eq!(
            AgentError::NotInitialized.to_string(),
            "Agent used before initialization"
        );
        assert_eq!(AgentError::Other("boom".into()).to_string(), "boom");
    }
}
