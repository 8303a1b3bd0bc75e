//! Mastermind Solver
//!
//! Plays Mastermind with pluggable agents. The built-in elimination agent keeps
//! every code consistent with the feedback so far and guesses the code that
//! minimizes the expected size of the remaining pool.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Alphabet, Code, Feedback};
//!
//! let alphabet = Alphabet::new(6).unwrap();
//! let guess = Code::parse("BRGYP", &alphabet, 5).unwrap();
//! let target = Code::parse("RBGCC", &alphabet, 5).unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback, Feedback::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Guessing agents
pub mod agents;

// Game engine and settings
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
