//! Random agent
//!
//! Guesses uniformly at random and never learns from feedback. Useful as a
//! baseline and for exercising the engine.

use super::{Agent, AgentError, AgentMove, GameSetup, Percept};
use crate::core::Alphabet;
use rand::prelude::*;

/// Agent guessing uniformly random codes
pub struct RandomAgent {
    rng: StdRng,
    setup: Option<(Alphabet, usize)>,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            setup: None,
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn initialize(&mut self, setup: &GameSetup) -> Result<(), AgentError> {
        self.setup = Some((setup.alphabet.clone(), setup.code_length));
        Ok(())
    }

    fn next_guess(&mut self, _percept: &Percept) -> Result<AgentMove, AgentError> {
        let (alphabet, length) = self.setup.as_ref().ok_or(AgentError::NotInitialized)?;
        let symbols = alphabet.symbols();

        let guess = (0..*length)
            .map(|_| symbols[self.rng.random_range(0..symbols.len())])
            .collect();

        Ok(AgentMove::Guess(guess))
    }
}
