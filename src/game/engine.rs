//! Game engine
//!
//! Drives one agent through one game: asks for guesses, validates them,
//! scores them against the hidden target and decides when the game ends.

use super::CancelToken;
use crate::agents::{Agent, AgentError, AgentMove, GameSetup, Percept};
use crate::core::{Code, Feedback};
use std::fmt;

/// Turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the agent's guess; `turn` guesses have been made
    AwaitingGuess { turn: usize },
    /// A legal guess for `turn` is being scored
    Scoring { turn: usize },
    /// Target found with the given number of guesses
    Solved { guesses: usize },
    /// Game lost, either by abstaining or by running out of guesses
    Exhausted { abstained: bool },
    /// Run cancelled mid-game
    Cancelled,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Solved { .. } | Self::Exhausted { .. } | Self::Cancelled
        )
    }

    /// Score of a finished game, lower is better
    ///
    /// A solve scores the guesses used, abstaining scores the guess budget and
    /// running out of guesses scores twice the budget. Cancelled and
    /// unfinished games have no score.
    #[must_use]
    pub const fn score(self, max_guesses: usize) -> Option<usize> {
        match self {
            Self::Solved { guesses } => Some(guesses),
            Self::Exhausted { abstained: true } => Some(max_guesses),
            Self::Exhausted { abstained: false } => Some(2 * max_guesses),
            Self::AwaitingGuess { .. } | Self::Scoring { .. } | Self::Cancelled => None,
        }
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub target: Code,
    pub turns: Vec<TurnRecord>,
    pub state: GameState,
    pub score: Option<usize>,
}

impl GameRecord {
    #[inline]
    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.state, GameState::Solved { .. })
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

/// Error type for games that cannot be completed
#[derive(Debug)]
pub enum GameError {
    /// The agent could not be initialized
    AgentInitialization { agent: &'static str, source: AgentError },
    /// Illegal guess or agent failure during a turn
    AgentContractViolation {
        agent: &'static str,
        turn: usize,
        reason: String,
    },
    /// The agent's state contradicts the feedback history
    StateInconsistency {
        agent: &'static str,
        turn: usize,
        reason: String,
    },
}

impl GameError {
    /// Whether a tournament may record this error and carry on
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::AgentContractViolation { .. })
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgentInitialization { agent, source } => {
                write!(f, "Agent '{agent}' failed to initialize: {source}")
            }
            Self::AgentContractViolation {
                agent,
                turn,
                reason,
            } => write!(
                f,
                "Agent '{agent}' violated the contract on guess {}: {reason}",
                turn + 1
            ),
            Self::StateInconsistency {
                agent,
                turn,
                reason,
            } => write!(
                f,
                "Agent '{agent}' reached an inconsistent state on guess {}: {reason}",
                turn + 1
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AgentInitialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Referee for games with fixed parameters
#[derive(Debug, Clone)]
pub struct GameEngine {
    setup: GameSetup,
    cancel: CancelToken,
}

impl GameEngine {
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        Self {
            setup,
            cancel: CancelToken::new(),
        }
    }

    /// Use `cancel` to stop games from outside
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn setup(&self) -> &GameSetup {
        &self.setup
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Hand the game parameters to `agent`
    ///
    /// # Errors
    /// Returns `GameError::AgentInitialization` if the agent rejects them.
    pub fn initialize<A: Agent + ?Sized>(&self, agent: &mut A) -> Result<(), GameError> {
        agent
            .initialize(&self.setup)
            .map_err(|source| GameError::AgentInitialization {
                agent: agent.name(),
                source,
            })
    }

    /// Play one game of `agent` against `target`
    ///
    /// The agent must already be initialized.
    ///
    /// # Errors
    /// Returns `GameError::AgentContractViolation` for an illegal guess or a
    /// failing agent call, and `GameError::StateInconsistency` when the agent
    /// reports that no code fits the feedback it was given.
    pub fn play<A: Agent + ?Sized>(
        &self,
        agent: &mut A,
        target: &Code,
    ) -> Result<GameRecord, GameError> {
        let length = self.setup.code_length;
        let mut state = GameState::AwaitingGuess { turn: 0 };
        let mut percept = Percept::opening();
        let mut pending: Option<Code> = None;
        let mut turns = Vec::new();

        while !state.is_terminal() {
            state = match state {
                GameState::AwaitingGuess { turn } => {
                    if self.cancel.is_cancelled() {
                        GameState::Cancelled
                    } else {
                        let reply = agent.next_guess(&percept);
                        if self.cancel.is_cancelled() {
                            GameState::Cancelled
                        } else {
                            match reply.map_err(|e| classify(agent.name(), turn, e))? {
                                AgentMove::Abstain => {
                                    log::debug!("Agent abstained on guess {}", turn + 1);
                                    GameState::Exhausted { abstained: true }
                                }
                                AgentMove::Guess(symbols) => {
                                    let guess = Code::from_symbols(
                                        &symbols,
                                        &self.setup.alphabet,
                                        length,
                                    )
                                    .map_err(|e| GameError::AgentContractViolation {
                                        agent: agent.name(),
                                        turn,
                                        reason: e.to_string(),
                                    })?;
                                    pending = Some(guess);
                                    GameState::Scoring { turn }
                                }
                            }
                        }
                    }
                }
                GameState::Scoring { turn } => {
                    let guess = pending.take().ok_or_else(|| GameError::StateInconsistency {
                        agent: agent.name(),
                        turn,
                        reason: "no guess to score".to_string(),
                    })?;
                    let feedback = Feedback::evaluate(&guess, target);
                    let turn = turn + 1;
                    log::debug!("Guess {turn}: {guess} -> {feedback}");

                    turns.push(TurnRecord {
                        guess: guess.clone(),
                        feedback,
                    });

                    if feedback.is_solved(length) {
                        GameState::Solved { guesses: turn }
                    } else if turn >= self.setup.max_guesses {
                        GameState::Exhausted { abstained: false }
                    } else {
                        percept = Percept::after(turn, guess, feedback);
                        GameState::AwaitingGuess { turn }
                    }
                }
                terminal => terminal,
            };
        }

        Ok(GameRecord {
            target: target.clone(),
            turns,
            state,
            score: state.score(self.setup.max_guesses),
        })
    }
}

fn classify(agent: &'static str, turn: usize, error: AgentError) -> GameError {
    match error {
        AgentError::Inconsistent(e) => GameError::StateInconsistency {
            agent,
            turn,
            reason: e.to_string(),
        },
        other => GameError::AgentContractViolation {
            agent,
            turn,
            reason: other.to_string(),
        },
    }
}
