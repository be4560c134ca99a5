//! Source of secret words

use crate::core::Word;

/// Supplies secret words for new games
///
/// Implementations return a normalized word picked uniformly at random, or
/// `None` when they have nothing to pick from.
pub trait WordSupplier {
    fn random_word(&mut self) -> Option<Word>;
}

impl<S: WordSupplier + ?Sized> WordSupplier for &mut S {
    fn random_word(&mut self) -> Option<Word> {
        (**self).random_word()
    }
}

impl<S: WordSupplier + ?Sized> WordSupplier for Box<S> {
    fn random_word(&mut self) -> Option<Word> {
        (**self).random_word()
    }
}
