//! Guess input validation
//!
//! Raw player input is checked here, before it ever reaches the game. Errors
//! are reported back to the player, who is asked again.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidGuessLength { expected: usize, actual: usize },
    InvalidGuessCharacters,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength { expected, actual } => write!(
                f,
                "INVALID WORD LENGTH ({actual} LETTERS INSTEAD OF {expected})."
            ),
            Self::InvalidGuessCharacters => write!(f, "ILLEGAL CHARACTERS FOUND."),
        }
    }
}

impl std::error::Error for InputError {}

/// Check a raw guess and return it trimmed and uppercased
///
/// Length is checked before characters.
///
/// # Errors
///
/// Returns `InputError` if the trimmed input does not have `expected_len`
/// characters or contains anything other than ASCII letters.
///
/// # Examples
/// ```
/// use sutom::commands::input::{InputError, validate_guess};
///
/// assert_eq!(validate_guess(" able\n", 4).unwrap(), "ABLE");
/// assert_eq!(
///     validate_guess("error", 4),
///     Err(InputError::InvalidGuessLength { expected: 4, actual: 5 })
/// );
/// ```
pub fn validate_guess(input: &str, expected_len: usize) -> Result<String, InputError> {
    let trimmed = input.trim();

    let actual = trimmed.chars().count();
    if actual != expected_len {
        return Err(InputError::InvalidGuessLength {
            expected: expected_len,
            actual,
        });
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::InvalidGuessCharacters);
    }

    Ok(trimmed.to_ascii_uppercase())
}
