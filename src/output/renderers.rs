//! Guess renderers
//!
//! Turn a [`GuessRecord`] into text. Placements carry no styling of their
//! own; each renderer decides how a placement looks.

use crate::core::Placement;
use crate::game::GuessRecord;
use clap::ValueEnum;
use colored::Colorize;

/// Renders one evaluated guess for display
pub trait ResultRenderer {
    fn render(&self, record: &GuessRecord) -> String;
}

/// Colored letters: green correct, yellow misplaced, red absent
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiRenderer;

impl ResultRenderer for AnsiRenderer {
    fn render(&self, record: &GuessRecord) -> String {
        record
            .letters()
            .map(|(letter, placement)| {
                let letter = letter.to_string();
                match placement {
                    Placement::Correct => letter.bright_green().bold().to_string(),
                    Placement::Misplaced => letter.bright_yellow().bold().to_string(),
                    Placement::Absent => letter.bright_red().to_string(),
                }
            })
            .collect()
    }
}

/// Letters followed by their emoji squares, e.g. `ABLE ⬜🟨⬜🟨`
#[derive(Debug, Default, Clone, Copy)]
pub struct EmojiRenderer;

impl ResultRenderer for EmojiRenderer {
    fn render(&self, record: &GuessRecord) -> String {
        format!("{} {}", record.guess(), record.feedback().to_emoji())
    }
}

/// Uncolored brackets: `[A]` correct, `(A)` misplaced, ` A ` absent
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl ResultRenderer for PlainRenderer {
    fn render(&self, record: &GuessRecord) -> String {
        record
            .letters()
            .map(|(letter, placement)| match placement {
                Placement::Correct => format!("[{letter}]"),
                Placement::Misplaced => format!("({letter})"),
                Placement::Absent => format!(" {letter} "),
            })
            .collect()
    }
}

/// Renderer selection for the command line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    #[default]
    Color,
    Emoji,
    Plain,
}

impl RenderStyle {
    #[must_use]
    pub fn renderer(self) -> Box<dyn ResultRenderer> {
        match self {
            Self::Color => Box::new(AnsiRenderer),
            Self::Emoji => Box::new(EmojiRenderer),
            Self::Plain => Box::new(PlainRenderer),
        }
    }
}
