//! Display functions for the console game

use super::renderers::ResultRenderer;
use crate::game::{Game, GameStatus, GuessRecord};
use colored::Colorize;
use std::io::{self, Write};

/// Escape sequence that clears the terminal
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Write the word length, attempts left, and every past guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board(
    out: &mut impl Write,
    game: &Game,
    renderer: &dyn ResultRenderer,
) -> io::Result<()> {
    writeln!(out, "{} LETTERS WORD TO FIND.", game.word_length())?;
    writeln!(out, "{} ATTEMPTS LEFT.", game.attempts_left())?;

    for record in game.history() {
        writeln!(out, "{}", renderer.render(record))?;
    }

    Ok(())
}

/// Write the end-of-game banner; nothing for a game still in progress
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome(out: &mut impl Write, game: &Game) -> io::Result<()> {
    match (game.status(), game.revealed_secret()) {
        (GameStatus::Won, _) => {
            let attempts = game.history().len();
            writeln!(out, "{}", "YOU WON".bright_green().bold())?;
            writeln!(
                out,
                "FOUND IN {attempts} {}.",
                if attempts == 1 { "ATTEMPT" } else { "ATTEMPTS" }
            )?;
        }
        (GameStatus::Lost, Some(secret)) => {
            writeln!(out, "{}", "GAME OVER.".bright_red().bold())?;
            writeln!(out, "THE CORRECT WORD WAS : {}", secret.text().bold())?;
        }
        _ => {}
    }
    Ok(())
}

/// Print the result of evaluating one guess against a known secret
pub fn print_check_result(record: &GuessRecord, renderer: &dyn ResultRenderer) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", renderer.render(record));
    println!("{}", record.feedback().to_emoji());
    println!("{}", "─".repeat(40).cyan());

    let feedback = record.feedback();
    if record.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "Correct: {}  Misplaced: {}  Absent: {}",
            feedback.count_correct().to_string().green(),
            feedback.count_misplaced().to_string().yellow(),
            feedback.len() - feedback.count_correct() - feedback.count_misplaced()
        );
    }
}
