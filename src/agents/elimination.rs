//! Candidate elimination agent
//!
//! Keeps the pool of codes consistent with all feedback so far and guesses
//! the code expected to leave the smallest pool behind.

use super::{Agent, AgentError, AgentMove, GameSetup, Percept};
use crate::core::Code;
use crate::solver::{CandidateTracker, CodeSpace, GuessSelector};

/// Agent playing by candidate elimination
///
/// The code space and opening guess are computed once in `initialize` and
/// reused for every game.
pub struct EliminationAgent {
    selector: GuessSelector,
    space: Option<CodeSpace>,
    opening: Option<Code>,
    tracker: Option<CandidateTracker>,
}

impl EliminationAgent {
    /// Create an agent whose sampling fallback is seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_selector(GuessSelector::new(seed))
    }

    /// Create an agent with a custom selector
    #[must_use]
    pub const fn with_selector(selector: GuessSelector) -> Self {
        Self {
            selector,
            space: None,
            opening: None,
            tracker: None,
        }
    }

    /// The opening guess, once initialized
    #[must_use]
    pub const fn opening_guess(&self) -> Option<&Code> {
        self.opening.as_ref()
    }

    /// Size of the current candidate pool, `None` before the first feedback of a game
    #[must_use]
    pub fn candidates_remaining(&self) -> Option<usize> {
        self.tracker.as_ref().map(CandidateTracker::len)
    }
}

impl Agent for EliminationAgent {
    fn name(&self) -> &'static str {
        "elimination"
    }

    fn initialize(&mut self, setup: &GameSetup) -> Result<(), AgentError> {
        let space = CodeSpace::new(setup.alphabet.clone(), setup.code_length)
            .map_err(AgentError::Setup)?;
        let opening = self
            .selector
            .opening(&space)
            .map_err(AgentError::Inconsistent)?;

        log::debug!(
            "Opening guess {} over {} codes ({:?})",
            opening.guess,
            space.len(),
            opening.mode
        );

        self.opening = Some(opening.guess);
        self.space = Some(space);
        self.tracker = None;
        Ok(())
    }

    fn next_guess(&mut self, percept: &Percept) -> Result<AgentMove, AgentError> {
        let (Some(space), Some(opening)) = (self.space.as_ref(), self.opening.as_ref()) else {
            return Err(AgentError::NotInitialized);
        };

        // New game
        if percept.turn == 0 {
            self.tracker = None;
            return Ok(AgentMove::Guess(opening.symbols()));
        }

        let last_guess = percept
            .last_guess
            .as_ref()
            .ok_or_else(|| AgentError::Other(format!("Turn {} has no last guess", percept.turn)))?;

        // The first feedback of a game narrows the full space
        let mut tracker = self
            .tracker
            .take()
            .unwrap_or_else(|| CandidateTracker::from_space(space));

        tracker
            .narrow(last_guess, percept.feedback())
            .map_err(AgentError::Inconsistent)?;

        let selection = self
            .selector
            .select(tracker.pool())
            .map_err(AgentError::Inconsistent)?;

        self.tracker = Some(tracker);
        Ok(AgentMove::Guess(selection.guess.symbols()))
    }
}
