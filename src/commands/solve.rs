//! Code solving command
//!
//! Plays one game against a known target with the elimination agent and
//! reports how the candidate pool shrank along the way.

use crate::agents::{EliminationAgent, GameSetup};
use crate::core::{Code, Feedback};
use crate::game::{GameEngine, GameState};
use crate::solver::partition::expected_remaining;
use crate::solver::{CandidateTracker, CodeSpace};

/// Result of solving a code
pub struct SolveResult {
    pub target: Code,
    pub steps: Vec<SolveStep>,
    pub state: GameState,
    pub score: Option<usize>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.state, GameState::Solved { .. })
    }
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected pool size after this guess, when more than one candidate remained
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with the elimination agent
///
/// # Errors
/// Returns an error if the agent cannot be set up for these parameters or
/// fails during the game.
pub fn solve_code(setup: GameSetup, target: &Code, seed: u64) -> anyhow::Result<SolveResult> {
    let space = CodeSpace::new(setup.alphabet.clone(), setup.code_length)?;
    let engine = GameEngine::new(setup);
    let mut agent = EliminationAgent::new(seed);

    engine.initialize(&mut agent)?;
    let record = engine.play(&mut agent, target)?;

    // Replay the game to measure the pool at each step
    let mut tracker = CandidateTracker::from_space(&space);
    let mut steps = Vec::with_capacity(record.turns.len());

    for turn in &record.turns {
        let candidates_before = tracker.len();
        let expected = (candidates_before > 1).then(|| expected_remaining(&turn.guess, tracker.pool()));
        let candidates_after = tracker.narrow(&turn.guess, turn.feedback)?;

        steps.push(SolveStep {
            guess: turn.guess.clone(),
            feedback: turn.feedback,
            candidates_before,
            candidates_after,
            expected_remaining: expected,
        });
    }

    Ok(SolveResult {
        target: record.target,
        steps,
        state: record.state,
        score: record.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn setup() -> GameSetup {
        GameSetup {
            code_length: 4,
            alphabet: Alphabet::new(6).unwrap(),
            max_guesses: 10,
        }
    }

    #[test]
    fn solve_reports_shrinking_pool() {
        let setup = setup();
        let target = Code::parse("CYPB", &setup.alphabet, 4).unwrap();

        let result = solve_code(setup, &target, 1).unwrap();

        assert!(result.success());
        assert_eq!(result.steps[0].candidates_before, 1296);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, target);
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn solve_is_deterministic() {
        let setup = setup();
        let target = Code::parse("RRGG", &setup.alphabet, 4).unwrap();

        let a = solve_code(setup.clone(), &target, 9).unwrap();
        let b = solve_code(setup, &target, 9).unwrap();

        let guesses = |r: &SolveResult| r.steps.iter().map(|s| s.guess.clone()).collect::<Vec<_>>();
        assert_eq!(guesses(&a), guesses(&b));
    }
}
