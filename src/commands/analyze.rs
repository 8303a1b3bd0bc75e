//! Guess analysis command
//!
//! Measures how well a single guess splits the full code space.

use crate::agents::GameSetup;
use crate::core::{Code, CodeError};
use crate::solver::CodeSpace;
use crate::solver::partition::{
    DEFAULT_EXHAUSTIVE_THRESHOLD, GuessMetrics, calculate_metrics, select_best_guess,
};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub metrics: GuessMetrics,
    pub space_size: usize,
    /// Best opening guess and its expected remaining size, for spaces small
    /// enough to score exhaustively
    pub best_opening: Option<(Code, f64)>,
}

/// Analyze `guess` as an opening move
///
/// # Errors
/// Returns `CodeError` if the code space cannot be enumerated.
pub fn analyze_code(setup: &GameSetup, guess: &Code) -> Result<AnalysisResult, CodeError> {
    let space = CodeSpace::new(setup.alphabet.clone(), setup.code_length)?;
    let metrics = calculate_metrics(guess, space.codes());

    let best_opening = (space.len() <= DEFAULT_EXHAUSTIVE_THRESHOLD)
        .then(|| select_best_guess(space.codes(), space.codes()))
        .flatten()
        .map(|(code, expected)| (code.clone(), expected));

    Ok(AnalysisResult {
        guess: guess.clone(),
        metrics,
        space_size: space.len(),
        best_opening,
    })
}
