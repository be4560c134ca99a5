//! Interactive TUI game
//!
//! Board of colored tiles with live input, built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::{record_line, ui};
