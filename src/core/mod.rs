//! Core domain types for Mastermind
//!
//! Colours, codes and feedback. Nothing here depends on the solver or on
//! terminal output.

mod code;
mod colour;
mod feedback;

pub use code::{Code, CodeError};
pub use colour::{Alphabet, Colour};
pub use feedback::Feedback;
