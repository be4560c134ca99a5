//! Terminal output formatting
//!
//! Guess renderers and display helpers for the console game.

pub mod display;
pub mod renderers;

pub use display::{CLEAR_SCREEN, print_check_result, write_board, write_outcome};
pub use renderers::{AnsiRenderer, EmojiRenderer, PlainRenderer, RenderStyle, ResultRenderer};
