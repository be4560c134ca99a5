//! Single guess evaluation command
//!
//! Evaluates one guess against a given secret and prints the feedback.

use super::input::validate_guess;
use crate::core::{Feedback, Word};
use crate::game::GuessRecord;
use crate::output::{RenderStyle, print_check_result};
use anyhow::{Context, Result};

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if the secret is not a word, or the guess fails the same
/// validation as interactive input.
pub fn evaluate_check(secret: &str, guess: &str) -> Result<GuessRecord> {
    let secret = Word::new(secret.trim()).context("Invalid secret word")?;
    let guess = validate_guess(guess, secret.len()).context("Invalid guess")?;
    let guess = Word::new(guess)?;

    let feedback = Feedback::calculate(&guess, &secret);
    Ok(GuessRecord::new(guess, feedback))
}

/// Run the check command
///
/// # Errors
///
/// See [`evaluate_check`].
pub fn run_check(secret: &str, guess: &str, style: RenderStyle) -> Result<()> {
    let record = evaluate_check(secret, guess)?;
    print_check_result(&record, style.renderer().as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_beer_able() {
        let record = evaluate_check("beer", "able").unwrap();
        assert_eq!(record.guess().text(), "ABLE");
        assert_eq!(record.feedback().to_string(), "-Y-Y");
    }

    #[test]
    fn check_exact_match() {
        assert!(evaluate_check("EERIE", "eerie").unwrap().is_win());
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = evaluate_check("BEER", "ERROR").unwrap_err();
        assert_eq!(err.to_string(), "Invalid guess");
        assert!(format!("{err:#}").contains("INVALID WORD LENGTH"));
    }

    #[test]
    fn check_rejects_bad_secret() {
        let err = evaluate_check("b33r", "able").unwrap_err();
        assert_eq!(err.to_string(), "Invalid secret word");
    }
}
