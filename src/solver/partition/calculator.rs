//! Partition statistics for a single guess
//!
//! Given a guess and a pool of candidates, groups the pool by feedback and
//! summarizes the resulting buckets.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Metrics describing how a guess splits a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected number of candidates left after this guess (sum of squares / pool size)
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedbacks the guess can produce
    pub partitions: usize,
    /// Shannon entropy of the feedback distribution in bits
    pub entropy: f64,
}

/// Sum of squared bucket sizes when `guess` is scored against every code in `pool`
///
/// Lower is better. Dividing by `pool.len()` gives the expected remaining pool size.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code};
/// use mastermind_solver::solver::partition::sum_of_squares;
///
/// let alphabet = Alphabet::new(2).unwrap();
/// let pool: Vec<Code> = ["BB", "BR", "RB", "RR"]
///     .iter()
///     .map(|t| Code::parse(t, &alphabet, 2).unwrap())
///     .collect();
///
/// // BB splits the pool into {BB}, {BR, RB}, {RR}
/// assert_eq!(sum_of_squares(&pool[0], &pool), 1 + 4 + 1);
/// ```
#[must_use]
pub fn sum_of_squares(guess: &Code, pool: &[Code]) -> usize {
    group_by_feedback(guess, pool)
        .values()
        .map(|&size| size * size)
        .sum()
}

/// Expected remaining pool size if `guess` is played
///
/// Returns 0.0 for an empty pool.
#[must_use]
pub fn expected_remaining(guess: &Code, pool: &[Code]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }

    sum_of_squares(guess, pool) as f64 / pool.len() as f64
}

/// Calculate all partition metrics in a single pass
#[must_use]
pub fn calculate_metrics(guess: &Code, pool: &[Code]) -> GuessMetrics {
    if pool.is_empty() {
        return GuessMetrics {
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
            entropy: 0.0,
        };
    }

    let buckets = group_by_feedback(guess, pool);
    let total = pool.len() as f64;

    let squares: usize = buckets.values().map(|&size| size * size).sum();
    let max_partition = buckets.values().max().copied().unwrap_or(0);
    let entropy = buckets
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum();

    GuessMetrics {
        expected_remaining: squares as f64 / total,
        max_partition,
        partitions: buckets.len(),
        entropy,
    }
}

/// Group pool codes by the feedback they produce with the guess
fn group_by_feedback(guess: &Code, pool: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in pool {
        let feedback = Feedback::evaluate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
