//! Code space enumeration
//!
//! Every code of length L over an alphabet of K colours, in the order of
//! counting from 0 to K^L - 1 in base K with the first peg as the most
//! significant digit.

use crate::core::{Alphabet, Code, CodeError};

/// Largest code space that will be materialized (16.7M codes)
pub const MAX_SPACE_SIZE: usize = 1 << 24;

/// The full universe of codes for an alphabet and length
///
/// Built once and never mutated.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    alphabet: Alphabet,
    length: usize,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate all codes for `alphabet` and `length`
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - `length` is zero
    /// - K^L exceeds [`MAX_SPACE_SIZE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    /// use mastermind_solver::solver::CodeSpace;
    ///
    /// let space = CodeSpace::new(Alphabet::new(2).unwrap(), 2).unwrap();
    /// let codes: Vec<String> = space.iter().map(ToString::to_string).collect();
    /// assert_eq!(codes, ["BB", "BR", "RB", "RR"]);
    /// ```
    pub fn new(alphabet: Alphabet, length: usize) -> Result<Self, CodeError> {
        if length == 0 {
            return Err(CodeError::EmptyCode);
        }

        let size = Self::size_of(alphabet.len(), length).ok_or(CodeError::SpaceTooLarge {
            colours: alphabet.len(),
            length,
        })?;

        let codes = (0..size)
            .map(|index| decode(index, &alphabet, length))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet,
            length,
            codes,
        })
    }

    /// Number of codes for `colours` and `length`, if within [`MAX_SPACE_SIZE`]
    #[must_use]
    pub fn size_of(colours: usize, length: usize) -> Option<usize> {
        let exponent = u32::try_from(length).ok()?;
        colours
            .checked_pow(exponent)
            .filter(|&size| size <= MAX_SPACE_SIZE)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Code at an enumeration index
    #[inline]
    #[must_use]
    pub fn code_at(&self, index: usize) -> Option<&Code> {
        self.codes.get(index)
    }

    /// Enumeration index of a code
    ///
    /// Returns `None` if the code has the wrong length or uses a colour outside the alphabet.
    #[must_use]
    pub fn index_of(&self, code: &Code) -> Option<usize> {
        if code.len() != self.length {
            return None;
        }

        let base = self.alphabet.len();
        code.pegs().iter().try_fold(0usize, |index, &peg| {
            let digit = self.alphabet.digit_of(peg)?;
            Some(index * base + digit)
        })
    }
}

impl<'a> IntoIterator for &'a CodeSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Decode a base-K index into a code, first peg most significant
fn decode(index: usize, alphabet: &Alphabet, length: usize) -> Result<Code, CodeError> {
    let base = alphabet.len();
    let mut pegs = vec![alphabet.colours()[0]; length];
    let mut rest = index;

    for peg in pegs.iter_mut().rev() {
        // rest % base is always a valid digit
        if let Some(colour) = alphabet.colour(rest % base) {
            *peg = colour;
        }
        rest /= base;
    }

    Code::new(pegs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;
    use rustc_hash::FxHashSet;

    fn space(colours: usize, length: usize) -> CodeSpace {
        CodeSpace::new(Alphabet::new(colours).unwrap(), length).unwrap()
    }

    #[test]
    fn space_size_is_k_to_the_l() {
        assert_eq!(space(2, 2).len(), 4);
        assert_eq!(space(3, 3).len(), 27);
        assert_eq!(space(6, 4).len(), 1296);
        assert_eq!(space(6, 5).len(), 7776);
        assert_eq!(space(1, 4).len(), 1);
    }

    #[test]
    fn space_codes_are_distinct() {
        let space = space(4, 4);
        let unique: FxHashSet<&Code> = space.iter().collect();
        assert_eq!(unique.len(), space.len());
    }

    #[test]
    fn space_order_is_base_k_most_significant_first() {
        let space = space(3, 3);
        assert_eq!(space.code_at(0).unwrap().to_string(), "BBB");
        assert_eq!(space.code_at(1).unwrap().to_string(), "BBR");
        assert_eq!(space.code_at(2).unwrap().to_string(), "BBG");
        assert_eq!(space.code_at(3).unwrap().to_string(), "BRB");
        // 2*9 + 1*3 + 0 = 21
        assert_eq!(space.code_at(21).unwrap().to_string(), "GRB");
        assert_eq!(space.code_at(26).unwrap().to_string(), "GGG");
        assert!(space.code_at(27).is_none());
    }

    #[test]
    fn index_and_code_are_inverse() {
        let space = space(4, 3);
        for (i, code) in space.iter().enumerate() {
            assert_eq!(space.index_of(code), Some(i));
            assert_eq!(space.code_at(i), Some(code));
        }
    }

    #[test]
    fn index_of_rejects_foreign_codes() {
        let space = space(2, 3);

        let wrong_length = Code::new(vec![Colour::Blue, Colour::Red]).unwrap();
        assert_eq!(space.index_of(&wrong_length), None);

        let foreign_colour = Code::new(vec![Colour::Blue, Colour::Cyan, Colour::Red]).unwrap();
        assert_eq!(space.index_of(&foreign_colour), None);
    }

    #[test]
    fn enumeration_is_reproducible() {
        let a = space(3, 4);
        let b = space(3, 4);
        assert_eq!(a.codes(), b.codes());
    }

    #[test]
    fn zero_length_rejected() {
        let result = CodeSpace::new(Alphabet::full(), 0);
        assert!(matches!(result, Err(CodeError::EmptyCode)));
    }

    #[test]
    fn oversized_space_rejected() {
        // 6^10 = 60M codes
        let result = CodeSpace::new(Alphabet::full(), 10);
        assert!(matches!(
            result,
            Err(CodeError::SpaceTooLarge {
                colours: 6,
                length: 10
            })
        ));
        assert_eq!(CodeSpace::size_of(6, 10), None);
        assert_eq!(CodeSpace::size_of(6, 9), Some(10_077_696));
    }
}
