//! Command implementations

pub mod check;
pub mod input;
pub mod simple;

pub use check::{evaluate_check, run_check};
pub use input::{InputError, validate_guess};
pub use simple::{run_session, run_simple};

use crate::output::RenderStyle;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use log::info;

/// Default number of attempts per game
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Settings shared by the playing commands
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub attempt_limit: u32,
    /// `builtin` for the embedded dictionary, otherwise a file path
    pub wordlist: String,
    pub seed: Option<u64>,
    pub style: RenderStyle,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPTS,
            wordlist: "builtin".to_string(),
            seed: None,
            style: RenderStyle::default(),
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Build the word supplier described by this config
    ///
    /// # Errors
    ///
    /// Returns an error if the word list file cannot be read or holds no
    /// valid words.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let dictionary = match self.wordlist.as_str() {
            "builtin" => Dictionary::embedded(),
            path => Dictionary::from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?,
        };

        if dictionary.is_empty() {
            anyhow::bail!("Word list '{}' contains no valid words", self.wordlist);
        }
        info!("dictionary ready: {} words", dictionary.len());

        Ok(match self.seed {
            Some(seed) => dictionary.with_seed(seed),
            None => dictionary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.attempt_limit, 5);
        assert_eq!(config.wordlist, "builtin");
        assert!(config.seed.is_none());
    }

    #[test]
    fn builtin_dictionary_loads() {
        let dictionary = GameConfig::default().dictionary().unwrap();
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn missing_wordlist_file_errors() {
        let config = GameConfig {
            wordlist: "/definitely/not/here.txt".to_string(),
            ..GameConfig::default()
        };
        let err = config.dictionary().unwrap_err();
        assert!(err.to_string().contains("Failed to load word list"));
    }

    #[test]
    fn empty_wordlist_file_errors() {
        let path = std::env::temp_dir().join(format!("sutom-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "\n1234\n").unwrap();

        let config = GameConfig {
            wordlist: path.display().to_string(),
            ..GameConfig::default()
        };
        let result = config.dictionary();
        std::fs::remove_file(&path).unwrap();

        assert!(result.unwrap_err().to_string().contains("no valid words"));
    }

    #[test]
    fn seeded_dictionaries_agree() {
        use crate::game::WordSupplier;

        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let mut a = config.dictionary().unwrap();
        let mut b = config.dictionary().unwrap();
        assert_eq!(a.random_word(), b.random_word());
    }
}
