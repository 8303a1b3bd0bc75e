//! Mastermind solving algorithms
//!
//! Code space enumeration, candidate elimination, and guess selection.

pub mod partition;
mod space;
mod tracker;

pub use partition::{GuessSelector, Selection, SelectionMode};
pub use space::{CodeSpace, MAX_SPACE_SIZE};
pub use tracker::{CandidateTracker, SolverError, narrow};
