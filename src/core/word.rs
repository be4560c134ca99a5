//! Word representation
//!
//! A Word is a non-empty sequence of uppercase ASCII letters. Secret words and
//! guesses share this type; lengths vary from game to game.

use super::LetterCounts;
use std::fmt;
use std::str::FromStr;

/// An uppercase ASCII word of any positive length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// Surrounding whitespace is not trimmed; callers reading from files or
    /// terminals trim first.
    ///
    /// # Errors
    /// Returns `WordError` if the string is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use sutom::core::Word;
    ///
    /// let word = Word::new("beer").unwrap();
    /// assert_eq!(word.text(), "BEER");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("b33r").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count the occurrences of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.letters())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("BEER").unwrap();
        assert_eq!(word.text(), "BEER");
        assert_eq!(word.letters(), b"BEER");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("eerie").unwrap().text(), "EERIE");
        assert_eq!(Word::new("EeRiE").unwrap().text(), "EERIE");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("A").unwrap().len(), 1);
        assert_eq!(Word::new("anticonstitutionnellement").unwrap().len(), 25);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("be3r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("be r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new(" beer"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bière"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("beer!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("beer").unwrap().letter_counts();
        assert_eq!(counts.remaining(b'B'), 1);
        assert_eq!(counts.remaining(b'E'), 2);
        assert_eq!(counts.remaining(b'R'), 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_from_str_and_display() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
        assert!("sl4te".parse::<Word>().is_err());
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Word must contain only ASCII letters"
        );
        assert_eq!(
            WordError::Empty.to_string(),
            "Word must contain at least one letter"
        );
    }
}
