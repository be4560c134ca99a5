//! Letter frequency counting
//!
//! Tracks how many unclaimed occurrences of each letter a secret word still
//! holds while a guess is being evaluated.

use rustc_hash::FxHashMap;

/// Mapping from letter to remaining occurrence count
///
/// Letters that do not occur have no entry. Built fresh for every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<u8, usize>);

impl LetterCounts {
    /// Count every letter of `letters`
    ///
    /// # Examples
    /// ```
    /// use sutom::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters(b"BEER");
    /// assert_eq!(counts.remaining(b'E'), 2);
    /// assert_eq!(counts.remaining(b'Z'), 0);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = FxHashMap::default();
        for &letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Remaining count for `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: u8) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Claim one occurrence of `letter`
    ///
    /// Returns `false` and changes nothing when no occurrence is left.
    pub fn consume(&mut self, letter: u8) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of distinct letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_beer() {
        let counts = LetterCounts::from_letters(b"BEER");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.remaining(b'B'), 1);
        assert_eq!(counts.remaining(b'E'), 2);
        assert_eq!(counts.remaining(b'R'), 1);
    }

    #[test]
    fn counts_empty_input() {
        let counts = LetterCounts::from_letters(b"");
        assert!(counts.is_empty());
        assert_eq!(counts.remaining(b'A'), 0);
    }

    #[test]
    fn counts_absent_letter_has_no_entry() {
        let counts = LetterCounts::from_letters(b"EERIE");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.remaining(b'Z'), 0);
    }

    #[test]
    fn consume_until_exhausted() {
        let mut counts = LetterCounts::from_letters(b"EERIE");
        assert_eq!(counts.remaining(b'E'), 3);

        assert!(counts.consume(b'E'));
        assert!(counts.consume(b'E'));
        assert!(counts.consume(b'E'));
        assert!(!counts.consume(b'E'));

        // Entry stays, at zero
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.remaining(b'E'), 0);
    }

    #[test]
    fn consume_absent_letter() {
        let mut counts = LetterCounts::from_letters(b"BEER");
        assert!(!counts.consume(b'Q'));
        assert_eq!(counts.len(), 3);
    }
}
