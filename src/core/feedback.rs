//! Guess evaluation
//!
//! Each letter of a guess is classified against the secret word:
//! - Correct: same letter at the same position
//! - Misplaced: letter occurs elsewhere in the secret and has not been claimed yet
//! - Absent: letter does not occur, or every occurrence is already claimed

use super::Word;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Correct,
    Misplaced,
    Absent,
}

impl Placement {
    /// Single-character code: `G` correct, `Y` misplaced, `-` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Placements for a whole guess, in letter order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Placement>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Every position starts out Absent
    /// 2. First pass: exact matches become Correct and claim one occurrence
    /// 3. Second pass: remaining positions become Misplaced while unclaimed
    ///    occurrences of their letter are left, scanning left to right
    ///
    /// The first pass must finish before the second starts, otherwise an early
    /// duplicate could claim an occurrence that belongs to a later exact match.
    ///
    /// # Panics
    /// Panics if the two words differ in length. `Game::submit_guess` rejects
    /// such guesses before they get here.
    ///
    /// # Examples
    /// ```
    /// use sutom::core::{Feedback, Placement, Word};
    ///
    /// let secret = Word::new("beer").unwrap();
    /// let guess = Word::new("able").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "-Y-Y");
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must have the same length"
        );

        let mut placements = vec![Placement::Absent; guess.len()];
        let mut available = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                placements[i] = Placement::Correct;
                available.consume(g);
            }
        }

        // Second pass: misplaced letters from what is left
        for (placement, &g) in placements.iter_mut().zip(guess.letters()) {
            if *placement != Placement::Correct && available.consume(g) {
                *placement = Placement::Misplaced;
            }
        }

        Self(placements)
    }

    /// Placements in positional order
    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&p| p == Placement::Correct)
    }

    /// Count the Correct placements
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Placement::Correct)
    }

    /// Count the Misplaced placements
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(Placement::Misplaced)
    }

    fn count(&self, wanted: Placement) -> usize {
        self.0.iter().filter(|&&p| p == wanted).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|p| p.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in &self.0 {
            write!(f, "{}", placement.code())?;
        }
        Ok(())
    }
}
