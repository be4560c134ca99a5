//! Sutom
//!
//! A terminal word-guessing game. A secret word is drawn from a dictionary and
//! the player has a limited number of attempts to find it, with per-letter
//! feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use sutom::core::Word;
//! use sutom::game::{Game, GameStatus};
//!
//! let mut game = Game::new(Word::new("eerie").unwrap(), 5).unwrap();
//!
//! let turn = game.submit_guess("erase").unwrap();
//! assert_eq!(turn.record.feedback().to_string(), "GY--G");
//! assert_eq!(turn.attempts_left, 4);
//!
//! let turn = game.submit_guess("eerie").unwrap();
//! assert_eq!(turn.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Attempt budget and game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
