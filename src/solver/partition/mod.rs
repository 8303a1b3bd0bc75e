//! Expected partition size scoring
//!
//! A guess splits the candidate pool into buckets of codes sharing the same feedback.
//! The score of a guess is the expected size of the bucket the target falls into,
//! `Σ |bucket|² / |pool|`, assuming the target is uniform over the pool.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, expected_remaining, sum_of_squares};
pub use selector::{
    DEFAULT_EXHAUSTIVE_THRESHOLD, DEFAULT_OPENING_SAMPLE_SIZE, DEFAULT_SAMPLE_SIZE, GuessSelector,
    Selection, SelectionMode, select_best_guess,
};
