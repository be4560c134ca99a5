//! Core domain types for the game
//!
//! Words, letter counts and guess evaluation. Everything here is pure and
//! independent of terminals, files and randomness.

mod counts;
mod feedback;
mod word;

pub use counts::LetterCounts;
pub use feedback::{Feedback, Placement};
pub use word::{Word, WordError};
