//! Game state machine
//!
//! A `Game` owns the secret word, the attempt budget and the guess history.
//! Guesses go in through [`Game::submit_guess`]; each evaluated guess either
//! wins, spends one attempt, or spends the last attempt and loses.

use super::WordSupplier;
use crate::core::{Feedback, Placement, Word};
use log::{debug, info};
use std::fmt;

/// Attempts allowed and attempts still available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    limit: u32,
    remaining: u32,
}

impl AttemptBudget {
    /// Create a full budget
    ///
    /// # Errors
    /// Returns `GameError::ZeroAttempts` if `limit` is 0.
    pub const fn new(limit: u32) -> Result<Self, GameError> {
        if limit == 0 {
            return Err(GameError::ZeroAttempts);
        }
        Ok(Self {
            limit,
            remaining: limit,
        })
    }

    #[inline]
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    #[inline]
    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.remaining == 0
    }

    /// Spend one attempt
    fn spend(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One evaluated guess: the guessed word and its placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Pair a guess with its feedback
    ///
    /// # Panics
    /// Panics if the feedback length does not match the guess.
    #[must_use]
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        assert_eq!(guess.len(), feedback.len(), "one placement per letter");
        Self { guess, feedback }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Each letter with its placement, in positional order
    pub fn letters(&self) -> impl Iterator<Item = (char, Placement)> + '_ {
        self.guess
            .letters()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.feedback.placements().iter().copied())
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_win()
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub record: GuessRecord,
    pub attempts_left: u32,
    pub status: GameStatus,
}

/// Errors raised when creating a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    ZeroAttempts,
    EmptyDictionary,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttempts => write!(f, "Attempt limit must be at least 1"),
            Self::EmptyDictionary => write!(f, "Word supplier has no words to choose from"),
        }
    }
}

impl std::error::Error for GameError {}

/// Errors raised for a guess that cannot be evaluated
///
/// Input layers filter these out before submitting; reaching one here means
/// the caller skipped validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    LengthMismatch { expected: usize, actual: usize },
    InvalidCharacters,
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "Guess must contain only ASCII letters"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    budget: AttemptBudget,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl Game {
    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::ZeroAttempts` if `attempt_limit` is 0.
    ///
    /// # Examples
    /// ```
    /// use sutom::core::Word;
    /// use sutom::game::{Game, GameStatus};
    ///
    /// let mut game = Game::new(Word::new("beer").unwrap(), 5).unwrap();
    /// let turn = game.submit_guess("able").unwrap();
    ///
    /// assert_eq!(turn.status, GameStatus::InProgress);
    /// assert_eq!(turn.attempts_left, 4);
    /// ```
    pub fn new(secret: Word, attempt_limit: u32) -> Result<Self, GameError> {
        let budget = AttemptBudget::new(attempt_limit)?;
        debug!(
            "new game: {} letters, {} attempts",
            secret.len(),
            attempt_limit
        );

        Ok(Self {
            secret,
            budget,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game with a secret drawn from `supplier`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the supplier has no word, or
    /// `GameError::ZeroAttempts` if `attempt_limit` is 0.
    pub fn from_supplier<S: WordSupplier + ?Sized>(
        supplier: &mut S,
        attempt_limit: u32,
    ) -> Result<Self, GameError> {
        // Check the limit first so a bad config never consumes a word
        AttemptBudget::new(attempt_limit)?;
        let secret = supplier.random_word().ok_or(GameError::EmptyDictionary)?;
        Self::new(secret, attempt_limit)
    }

    /// Evaluate a guess and advance the game
    ///
    /// The guess is compared case-insensitively. A winning guess does not
    /// spend an attempt, so winning on the last attempt is still a win.
    ///
    /// # Errors
    /// Returns `GuessError` without changing any state if the game is over,
    /// the guess length differs from the secret, or the guess contains
    /// anything other than ASCII letters.
    pub fn submit_guess(&mut self, guess: &str) -> Result<TurnOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let actual = guess.chars().count();
        if actual != self.secret.len() {
            return Err(GuessError::LengthMismatch {
                expected: self.secret.len(),
                actual,
            });
        }

        let guess = Word::new(guess).map_err(|_| GuessError::InvalidCharacters)?;
        let feedback = Feedback::calculate(&guess, &self.secret);
        debug!("guess {guess} -> {feedback}");

        let record = GuessRecord::new(guess, feedback);
        self.history.push(record.clone());

        if record.is_win() {
            self.status = GameStatus::Won;
            info!("game won after {} attempts", self.history.len());
        } else {
            self.budget.spend();
            if self.budget.is_exhausted() {
                self.status = GameStatus::Lost;
                info!("game lost, secret was {}", self.secret);
            }
        }

        Ok(TurnOutcome {
            record,
            attempts_left: self.budget.remaining(),
            status: self.status,
        })
    }

    /// Maximum number of attempts
    #[must_use]
    pub const fn attempt_limit(&self) -> u32 {
        self.budget.limit()
    }

    /// Attempts still available
    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.budget.remaining()
    }

    #[must_use]
    pub const fn budget(&self) -> AttemptBudget {
        self.budget
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Length of the secret word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Evaluated guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }
}
