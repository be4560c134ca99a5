//! Word lists for secret word selection
//!
//! Provides the embedded dictionary compiled into the binary, file loading,
//! and a random word supplier over either.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
