//! Peg colours and the ordered alphabet used in a session
//!
//! The game knows exactly six colours. A session plays with the first K of them,
//! in reference order: Blue, Red, Green, Yellow, Purple, Cyan.

use super::CodeError;
use std::fmt;

/// A single peg colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Cyan,
}

impl Colour {
    /// Number of supported colours
    pub const COUNT: usize = 6;

    /// All colours in reference order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Cyan,
    ];

    /// The single-letter symbol used on the board
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Cyan => 'C',
        }
    }

    /// Position of this colour in the reference order (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a colour by its board symbol
    ///
    /// Symbols are upper case; `'r'` is not a colour.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Colour;
    ///
    /// assert_eq!(Colour::from_symbol('R'), Some(Colour::Red));
    /// assert_eq!(Colour::from_symbol('r'), None);
    /// assert_eq!(Colour::from_symbol('X'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The ordered set of colours legal in a session
///
/// Always a prefix of [`Colour::ALL`], so digit `i` of a code in base K is
/// the colour at position `i` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    colours: Vec<Colour>,
}

impl Alphabet {
    /// Create an alphabet of the first `size` colours
    ///
    /// # Errors
    /// Returns `CodeError::InvalidAlphabetSize` unless `1 <= size <= 6`.
    pub fn new(size: usize) -> Result<Self, CodeError> {
        if size == 0 || size > Colour::COUNT {
            return Err(CodeError::InvalidAlphabetSize(size));
        }

        Ok(Self {
            colours: Colour::ALL[..size].to_vec(),
        })
    }

    /// The full six-colour alphabet
    #[must_use]
    pub fn full() -> Self {
        Self {
            colours: Colour::ALL.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour for a base-K digit
    #[inline]
    #[must_use]
    pub fn colour(&self, digit: usize) -> Option<Colour> {
        self.colours.get(digit).copied()
    }

    /// Base-K digit of a colour, if the colour is in this alphabet
    #[inline]
    #[must_use]
    pub fn digit_of(&self, colour: Colour) -> Option<usize> {
        self.colours.iter().position(|&c| c == colour)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, colour: Colour) -> bool {
        self.digit_of(colour).is_some()
    }

    /// Resolve a board symbol to a colour legal in this alphabet
    #[must_use]
    pub fn resolve(&self, symbol: char) -> Option<Colour> {
        Colour::from_symbol(symbol).filter(|&c| self.contains(c))
    }

    /// Board symbols in alphabet order
    #[must_use]
    pub fn symbols(&self) -> Vec<char> {
        self.colours.iter().map(|c| c.symbol()).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, colour) in self.colours.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{colour}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_symbol(colour.symbol()), Some(colour));
        }
    }

    #[test]
    fn from_symbol_is_exact() {
        assert_eq!(Colour::from_symbol('C'), Some(Colour::Cyan));
        assert_eq!(Colour::from_symbol('c'), None);
        assert_eq!(Colour::from_symbol('p'), None);
        assert_eq!(Colour::from_symbol('x'), None);
        assert_eq!(Colour::from_symbol('0'), None);
    }

    #[test]
    fn index_matches_reference_order() {
        for (i, colour) in Colour::ALL.into_iter().enumerate() {
            assert_eq!(colour.index(), i);
        }
    }

    #[test]
    fn alphabet_is_prefix_of_reference_order() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(
            alphabet.colours(),
            &[Colour::Blue, Colour::Red, Colour::Green]
        );
        assert_eq!(alphabet.symbols(), vec!['B', 'R', 'G']);
    }

    #[test]
    fn alphabet_rejects_bad_sizes() {
        assert_eq!(Alphabet::new(0), Err(CodeError::InvalidAlphabetSize(0)));
        assert_eq!(Alphabet::new(7), Err(CodeError::InvalidAlphabetSize(7)));
        assert_eq!(Alphabet::new(6).unwrap(), Alphabet::full());
    }

    #[test]
    fn alphabet_resolve_respects_size() {
        let alphabet = Alphabet::new(2).unwrap();
        assert_eq!(alphabet.resolve('B'), Some(Colour::Blue));
        assert_eq!(alphabet.resolve('R'), Some(Colour::Red));
        assert_eq!(alphabet.resolve('b'), None);
        // Green exists but is not part of a two-colour game
        assert_eq!(alphabet.resolve('G'), None);
    }

    #[test]
    fn alphabet_digits() {
        let alphabet = Alphabet::new(4).unwrap();
        assert_eq!(alphabet.colour(3), Some(Colour::Yellow));
        assert_eq!(alphabet.colour(4), None);
        assert_eq!(alphabet.digit_of(Colour::Green), Some(2));
        assert_eq!(alphabet.digit_of(Colour::Cyan), None);
    }

    #[test]
    fn alphabet_display() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(alphabet.to_string(), "[B, R, G]");
    }
}
