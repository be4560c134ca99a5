//! Random secret word selection

use super::DICTIONARY;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::game::WordSupplier;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::io;
use std::path::Path;

/// A word list that picks secret words uniformly at random
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    rng: StdRng,
}

impl Dictionary {
    /// Wrap an existing list, seeded from the OS
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// The built-in dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(DICTIONARY))
    }

    /// Load a line-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Replace the random source with a seeded one, for reproducible games
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSupplier for Dictionary {
    fn random_word(&mut self) -> Option<Word> {
        self.words.choose(&mut self.rng).cloned()
    }
}
