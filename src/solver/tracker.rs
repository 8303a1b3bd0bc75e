//! Candidate pool tracking
//!
//! The pool holds every code still consistent with all feedback seen this game.

use super::CodeSpace;
use crate::core::{Code, Feedback};
use std::fmt;

/// Error raised when the solver's internal state cannot be right
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No code is consistent with the feedback history
    StateInconsistency { guess: Option<Code>, feedback: Option<Feedback> },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateInconsistency {
                guess: Some(guess),
                feedback: Some(feedback),
            } => write!(
                f,
                "No candidates remain after {guess} scored {feedback}; feedback history is inconsistent"
            ),
            Self::StateInconsistency { .. } => {
                write!(f, "Candidate pool is empty; feedback history is inconsistent")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Keep the codes in `pool` that would have produced `feedback` for `guess`
///
/// Order of `pool` is preserved.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code, Feedback};
/// use mastermind_solver::solver::{CodeSpace, narrow};
///
/// let space = CodeSpace::new(Alphabet::new(2).unwrap(), 2).unwrap();
/// let guess = Code::parse("BB", space.alphabet(), 2).unwrap();
///
/// let pool = narrow(space.codes(), &guess, Feedback::new(1, 0));
/// let pool: Vec<String> = pool.iter().map(ToString::to_string).collect();
/// assert_eq!(pool, ["BR", "RB"]);
/// ```
#[must_use]
pub fn narrow(pool: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    pool.iter()
        .filter(|&candidate| Feedback::evaluate(guess, candidate) == feedback)
        .cloned()
        .collect()
}

/// Owner of the current candidate pool
#[derive(Debug, Clone)]
pub struct CandidateTracker {
    pool: Vec<Code>,
}

impl CandidateTracker {
    #[must_use]
    pub const fn new(pool: Vec<Code>) -> Self {
        Self { pool }
    }

    /// Start from the full code space
    #[must_use]
    pub fn from_space(space: &CodeSpace) -> Self {
        Self::new(space.codes().to_vec())
    }

    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Code] {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.pool.contains(code)
    }

    /// Replace the pool with its subset consistent with `guess` scoring `feedback`
    ///
    /// Returns the new pool size.
    ///
    /// # Errors
    /// Returns `SolverError::StateInconsistency` if no candidate survives. The
    /// pool is left untouched in that case.
    pub fn narrow(&mut self, guess: &Code, feedback: Feedback) -> Result<usize, SolverError> {
        let narrowed = narrow(&self.pool, guess, feedback);

        if narrowed.is_empty() {
            return Err(SolverError::StateInconsistency {
                guess: Some(guess.clone()),
                feedback: Some(feedback),
            });
        }

        log::debug!(
            "{guess} scored {feedback}: {} -> {} candidates",
            self.pool.len(),
            narrowed.len()
        );
        self.pool = narrowed;
        Ok(self.pool.len())
    }
}
