//! Mastermind code representation
//!
//! A Code is an immutable row of coloured pegs: a guess or a hidden target.

use super::{Alphabet, Colour};
use std::fmt;

/// An immutable sequence of peg colours
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: Box<[Colour]>,
}

/// Error type for invalid codes and code spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    EmptyCode,
    InvalidLength { expected: usize, actual: usize },
    IllegalSymbol { symbol: char, position: usize },
    InvalidAlphabetSize(usize),
    SpaceTooLarge { colours: usize, length: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "Code must contain at least one peg"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} pegs, got {actual}")
            }
            Self::IllegalSymbol { symbol, position } => {
                write!(f, "Illegal colour '{symbol}' at position {position}")
            }
            Self::InvalidAlphabetSize(size) => {
                write!(f, "Number of colours must be between 1 and 6, got {size}")
            }
            Self::SpaceTooLarge { colours, length } => write!(
                f,
                "Code space of {colours} colours and length {length} is too large to enumerate"
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a sequence of colours
    ///
    /// # Errors
    /// Returns `CodeError::EmptyCode` if no pegs are given.
    pub fn new(pegs: impl Into<Vec<Colour>>) -> Result<Self, CodeError> {
        let pegs: Vec<Colour> = pegs.into();
        if pegs.is_empty() {
            return Err(CodeError::EmptyCode);
        }

        Ok(Self {
            pegs: pegs.into_boxed_slice(),
        })
    }

    /// Build a code from board symbols, checking length and alphabet
    ///
    /// This is the gate every agent response goes through. Symbols must match
    /// exactly, so lower case is rejected.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of symbols is not `length`
    /// - A symbol is not a colour of `alphabet`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code};
    ///
    /// let alphabet = Alphabet::new(3).unwrap();
    /// let code = Code::from_symbols(&['B', 'G', 'R'], &alphabet, 3).unwrap();
    /// assert_eq!(code.to_string(), "BGR");
    ///
    /// assert!(Code::from_symbols(&['B', 'G'], &alphabet, 3).is_err());
    /// assert!(Code::from_symbols(&['B', 'G', 'C'], &alphabet, 3).is_err());
    /// assert!(Code::from_symbols(&['b', 'g', 'r'], &alphabet, 3).is_err());
    /// ```
    pub fn from_symbols(
        symbols: &[char],
        alphabet: &Alphabet,
        length: usize,
    ) -> Result<Self, CodeError> {
        if symbols.len() != length {
            return Err(CodeError::InvalidLength {
                expected: length,
                actual: symbols.len(),
            });
        }

        let pegs = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                alphabet
                    .resolve(symbol)
                    .ok_or(CodeError::IllegalSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(pegs)
    }

    /// Parse a code from text such as `"BRGYP"` (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Errors
    /// Same as [`Code::from_symbols`].
    pub fn parse(text: &str, alphabet: &Alphabet, length: usize) -> Result<Self, CodeError> {
        let symbols: Vec<char> = text.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        Self::from_symbols(&symbols, alphabet, length)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Colour] {
        &self.pegs
    }

    /// Board symbols of this code
    #[must_use]
    pub fn symbols(&self) -> Vec<char> {
        self.pegs.iter().map(|c| c.symbol()).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.pegs.iter() {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new(3).unwrap()
    }

    #[test]
    fn code_creation_valid() {
        let code = Code::parse("BRG", &alphabet(), 3).unwrap();
        assert_eq!(code.len(), 3);
        assert_eq!(code.pegs(), &[Colour::Blue, Colour::Red, Colour::Green]);
        assert_eq!(code.symbols(), vec!['B', 'R', 'G']);
    }

    #[test]
    fn code_parse_normalizes_case_and_whitespace() {
        let code = Code::parse("  brg \n", &alphabet(), 3).unwrap();
        assert_eq!(code.to_string(), "BRG");
    }

    #[test]
    fn code_empty_rejected() {
        assert_eq!(Code::new(Vec::new()), Err(CodeError::EmptyCode));
    }

    #[test]
    fn code_from_symbols_is_case_sensitive() {
        assert_eq!(
            Code::from_symbols(&['B', 'r', 'G'], &alphabet(), 3),
            Err(CodeError::IllegalSymbol {
                symbol: 'r',
                position: 1
            })
        );
    }

    #[test]
    fn code_invalid_length() {
        assert_eq!(
            Code::parse("BR", &alphabet(), 3),
            Err(CodeError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Code::parse("BRGB", &alphabet(), 3),
            Err(CodeError::InvalidLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn code_illegal_symbol() {
        // Yellow is a real colour but outside a three-colour alphabet
        assert_eq!(
            Code::parse("BYR", &alphabet(), 3),
            Err(CodeError::IllegalSymbol {
                symbol: 'Y',
                position: 1
            })
        );
        assert_eq!(
            Code::parse("BR?", &alphabet(), 3),
            Err(CodeError::IllegalSymbol {
                symbol: '?',
                position: 2
            })
        );
    }

    #[test]
    fn code_equality_ignores_input_case() {
        let a = Code::parse("bgr", &alphabet(), 3).unwrap();
        let b = Code::parse("BGR", &alphabet(), 3).unwrap();
        let c = Code::parse("BGB", &alphabet(), 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn code_error_display() {
        let err = CodeError::InvalidLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Code must be exactly 5 pegs, got 4");
    }
}
