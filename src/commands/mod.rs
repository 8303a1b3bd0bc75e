//! Command implementations

pub mod analyze;
pub mod run;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use run::{GameOutcome, GameProgress, RunSummary, execute_run, generate_targets, run_games};
pub use solve::{SolveResult, SolveStep, solve_code};
