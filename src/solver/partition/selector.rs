//! Guess selection by minimum expected partition size
//!
//! Small pools are scored exhaustively: every candidate is tried as the guess.
//! Large pools are scored from a random sample of guesses, each still measured
//! against the whole pool, which bounds the cost at `O(sample · pool)`.

use super::calculator::sum_of_squares;
use crate::core::Code;
use crate::solver::{CodeSpace, SolverError};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Pools up to this size are scored exhaustively
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 1000;

/// Number of sampled guesses for large pools
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Number of random guesses tried for the opening move on large spaces
pub const DEFAULT_OPENING_SAMPLE_SIZE: usize = 20;

/// Select the guess with the lowest expected remaining pool size
///
/// Every code in `guess_pool` is scored against all of `reference`. Returns the
/// winner and its expected remaining size, or `None` if either slice is empty.
/// Ties go to the earliest guess in `guess_pool`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code};
/// use mastermind_solver::solver::partition::select_best_guess;
///
/// let alphabet = Alphabet::new(3).unwrap();
/// let parse = |t: &str| Code::parse(t, &alphabet, 2).unwrap();
///
/// let guesses = vec![parse("GG"), parse("BR")];
/// let pool = vec![parse("BR"), parse("RB"), parse("BB")];
///
/// let (best, expected) = select_best_guess(&guesses, &pool).unwrap();
/// // GG cannot tell the pool apart; BR separates all three
/// assert_eq!(best.to_string(), "BR");
/// assert!((expected - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Code], reference: &[Code]) -> Option<(&'a Code, f64)> {
    if reference.is_empty() {
        return None;
    }

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(i, guess)| (i, sum_of_squares(guess, reference)))
        .min_by(|(i1, s1), (i2, s2)| s1.cmp(s2).then(i1.cmp(i2)))
        .map(|(i, squares)| (&guess_pool[i], squares as f64 / reference.len() as f64))
}

/// How a guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Only one candidate left, no scoring needed
    Single,
    /// Every candidate scored against the pool
    Exhaustive,
    /// A random sample scored against the pool
    Sampled,
}

/// A chosen guess and how it scored
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub guess: Code,
    /// Expected remaining pool size, `None` when no scoring took place
    pub expected_remaining: Option<f64>,
    pub mode: SelectionMode,
    /// Size of the reference set the guess was scored against
    pub pool_size: usize,
}

/// Guess selector with its own random source for the sampling fallback
///
/// The random source is fixed at construction, so the same seed and the same
/// pools always give the same guesses.
#[derive(Debug, Clone)]
pub struct GuessSelector {
    threshold: usize,
    sample_size: usize,
    opening_sample_size: usize,
    rng: StdRng,
}

impl GuessSelector {
    /// Create a selector with default thresholds and a seeded random source
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub const fn from_rng(rng: StdRng) -> Self {
        Self {
            threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            sample_size: DEFAULT_SAMPLE_SIZE,
            opening_sample_size: DEFAULT_OPENING_SAMPLE_SIZE,
            rng,
        }
    }

    /// Set the largest pool size that is scored exhaustively
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sample sizes used for large pools and for the opening move (minimum 1)
    #[must_use]
    pub fn with_sample_sizes(mut self, sample_size: usize, opening_sample_size: usize) -> Self {
        self.sample_size = sample_size.max(1);
        self.opening_sample_size = opening_sample_size.max(1);
        self
    }

    /// Choose the next guess from the current candidate pool
    ///
    /// # Errors
    /// Returns `SolverError::StateInconsistency` for an empty pool: no code fits
    /// the feedback history, so there is nothing sound to guess.
    pub fn select(&mut self, pool: &[Code]) -> Result<Selection, SolverError> {
        let inconsistent = || SolverError::StateInconsistency {
            guess: None,
            feedback: None,
        };

        match pool.len() {
            0 => Err(inconsistent()),
            1 => Ok(Selection {
                guess: pool[0].clone(),
                expected_remaining: None,
                mode: SelectionMode::Single,
                pool_size: 1,
            }),
            size if size <= self.threshold => {
                log::debug!("Scoring all {size} candidates");
                let (guess, expected) = select_best_guess(pool, pool).ok_or_else(inconsistent)?;
                Ok(Selection {
                    guess: guess.clone(),
                    expected_remaining: Some(expected),
                    mode: SelectionMode::Exhaustive,
                    pool_size: size,
                })
            }
            size => {
                let amount = self.sample_size.min(size);
                log::debug!("Scoring {amount} sampled guesses against {size} candidates");

                let sample: Vec<Code> = index::sample(&mut self.rng, size, amount)
                    .into_iter()
                    .map(|i| pool[i].clone())
                    .collect();
                let (guess, expected) =
                    select_best_guess(&sample, pool).ok_or_else(inconsistent)?;
                Ok(Selection {
                    guess: guess.clone(),
                    expected_remaining: Some(expected),
                    mode: SelectionMode::Sampled,
                    pool_size: size,
                })
            }
        }
    }

    /// Choose the opening guess, before any feedback exists
    ///
    /// Scored against the whole code space. Small spaces are scored exhaustively;
    /// otherwise a handful of codes are built by picking each peg's colour at
    /// random, and the best of those wins.
    ///
    /// # Errors
    /// Returns `SolverError::StateInconsistency` if the space is empty.
    pub fn opening(&mut self, space: &CodeSpace) -> Result<Selection, SolverError> {
        if space.len() <= self.threshold {
            let mut selection = self.select(space.codes())?;
            if selection.mode == SelectionMode::Single {
                selection.pool_size = space.len();
            }
            return Ok(selection);
        }

        log::debug!(
            "Scoring {} random opening guesses against {} codes",
            self.opening_sample_size,
            space.len()
        );

        let guesses: Vec<Code> = (0..self.opening_sample_size)
            .filter_map(|_| self.random_code(space))
            .collect();

        let (guess, expected) = select_best_guess(&guesses, space.codes()).ok_or(
            SolverError::StateInconsistency {
                guess: None,
                feedback: None,
            },
        )?;

        Ok(Selection {
            guess: guess.clone(),
            expected_remaining: Some(expected),
            mode: SelectionMode::Sampled,
            pool_size: space.len(),
        })
    }

    /// Code with an independently chosen colour at every position
    fn random_code(&mut self, space: &CodeSpace) -> Option<Code> {
        let colours = space.alphabet().colours();
        let pegs: Vec<_> = (0..space.length())
            .map(|_| colours[self.rng.random_range(0..colours.len())])
            .collect();
        Code::new(pegs).ok()
    }
}
