//! Guess feedback calculation
//!
//! Feedback is the pair of counts a guess earns against the hidden target:
//! - `in_place`: pegs with the right colour in the right position
//! - `in_colour`: remaining pegs whose colour appears elsewhere in the target
//!
//! Colours are counted as a multiset: each target peg can be credited at most once.

use super::{Code, Colour};
use std::fmt;

/// Score of a guess against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Feedback {
    pub in_place: usize,
    pub in_colour: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(in_place: usize, in_colour: usize) -> Self {
        Self {
            in_place,
            in_colour,
        }
    }

    /// Feedback of a correct guess for codes of `length`
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Check if every peg is in place for codes of `length`
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.in_place == length
    }

    /// Total pegs credited
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.in_place + self.in_colour
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. Count exact position matches
    /// 2. Count each colour among the remaining (unmatched) positions of both codes
    /// 3. `in_colour` is the sum over colours of the smaller of the two counts
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code, Feedback};
    ///
    /// let alphabet = Alphabet::new(2).unwrap();
    /// let target = Code::parse("BR", &alphabet, 2).unwrap();
    ///
    /// let guess = Code::parse("RB", &alphabet, 2).unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &target), Feedback::new(0, 2));
    ///
    /// let guess = Code::parse("BB", &alphabet, 2).unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &target), Feedback::new(1, 0));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Code, target: &Code) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "Codes must have equal length");

        let mut in_place = 0;
        let mut guess_rest = [0usize; Colour::COUNT];
        let mut target_rest = [0usize; Colour::COUNT];

        for (&g, &t) in guess.pegs().iter().zip(target.pegs()) {
            if g == t {
                in_place += 1;
            } else {
                guess_rest[g.index()] += 1;
                target_rest[t.index()] += 1;
            }
        }

        let in_colour = guess_rest
            .iter()
            .zip(&target_rest)
            .map(|(&g, &t)| g.min(t))
            .sum();

        Self {
            in_place,
            in_colour,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✓{} ?{}", self.in_place, self.in_colour)
    }
}
