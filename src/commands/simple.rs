//! Simple console mode
//!
//! Text-based game loop without TUI: print the board, read a guess, repeat
//! until the game is won or lost, then offer another round.

use super::GameConfig;
use super::input::validate_guess;
use crate::game::{Game, Statistics, WordSupplier};
use crate::output::{CLEAR_SCREEN, ResultRenderer, write_board, write_outcome};
use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// How a single game ended from the console's point of view
enum Flow {
    Finished,
    Quit,
}

/// Run the simple console mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or the terminal
/// cannot be read or written.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let mut dictionary = config.dictionary()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run_session(&mut dictionary, config, &mut input, &mut out)?;
    Ok(())
}

/// Play games until the player declines another one or input ends
///
/// Returns the statistics of the finished games.
///
/// # Errors
///
/// Returns an error if a game cannot be created or on I/O failure.
pub fn run_session<S, R, W>(
    supplier: &mut S,
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics>
where
    S: WordSupplier + ?Sized,
    R: BufRead,
    W: Write,
{
    let renderer = config.style.renderer();
    let mut stats = Statistics::default();

    loop {
        let mut game = Game::from_supplier(&mut *supplier, config.attempt_limit)?;

        match play_game(&mut game, renderer.as_ref(), config.clear_screen, input, out)? {
            Flow::Quit => break,
            Flow::Finished => {
                stats.record(&game);
                write_outcome(out, &game)?;
            }
        }

        if !ask_play_again(input, out)? {
            break;
        }
    }

    writeln!(
        out,
        "\nGAMES PLAYED : {} | WON : {} ({:.0}%)",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;
    Ok(stats)
}

fn play_game<R: BufRead, W: Write>(
    game: &mut Game,
    renderer: &dyn ResultRenderer,
    clear_screen: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    while !game.status().is_over() {
        if clear_screen {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write_board(out, game, renderer)?;

        let guess = loop {
            let Some(line) = read_line(input, out, "YOUR GUESS : ")? else {
                debug!("input closed mid-game");
                return Ok(Flow::Quit);
            };

            match validate_guess(&line, game.word_length()) {
                Ok(guess) => break guess,
                Err(e) => writeln!(out, "{}", e.to_string().bright_red())?,
            }
        };

        game.submit_guess(&guess)?;
    }

    if clear_screen {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    write_board(out, game, renderer)?;
    Ok(Flow::Finished)
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    let answer = read_line(input, out, "PLAY AGAIN? (Y/N) : ")?;
    Ok(matches!(
        answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("y" | "yes")
    ))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::output::RenderStyle;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn config(attempts: u32) -> GameConfig {
        GameConfig {
            attempt_limit: attempts,
            style: RenderStyle::Plain,
            clear_screen: false,
            ..GameConfig::default()
        }
    }

    fn session(secret: &str, attempts: u32, script: &str) -> (Statistics, String) {
        let mut supplier = Dictionary::new(vec![Word::new(secret).unwrap()]);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        let stats = run_session(&mut supplier, &config(attempts), &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_invalid_inputs() {
        let (stats, out) = session("BEER", 5, "error\nb33r\nable\nbeer\nn\n");

        assert!(out.contains("INVALID WORD LENGTH (5 LETTERS INSTEAD OF 4)."));
        assert!(out.contains("ILLEGAL CHARACTERS FOUND."));
        assert!(out.contains(" A (B) L (E)"));
        assert!(out.contains("[B][E][E][R]"));
        assert!(out.contains("YOU WON"));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn invalid_input_does_not_spend_attempts() {
        let (_, out) = session("BEER", 2, "error\nxx\nable\n");

        // Board drawn at 2 attempts, then at 1 after the single valid guess
        assert!(out.contains("2 ATTEMPTS LEFT."));
        assert!(out.contains("1 ATTEMPTS LEFT."));
        assert!(!out.contains("0 ATTEMPTS LEFT."));
    }

    #[test]
    fn loss_reveals_secret() {
        let (stats, out) = session("BEER", 1, "able\nno\n");

        assert!(out.contains("GAME OVER."));
        assert!(out.contains("THE CORRECT WORD WAS : "));
        assert!(out.contains("0 ATTEMPTS LEFT."));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn play_again_starts_new_game() {
        let (stats, out) = session("BEER", 3, "beer\ny\nable\nbeer\nn\n");

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![0, 1, 1]);
        assert!(out.contains("GAMES PLAYED : 2 | WON : 2 (100%)"));
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let (stats, out) = session("BEER", 5, "able\n");

        assert_eq!(stats.total_games, 0);
        assert!(!out.contains("YOU WON"));
        assert!(out.contains("GAMES PLAYED : 0"));
    }

    #[test]
    fn clear_screen_emitted_when_enabled() {
        let mut supplier = Dictionary::new(vec![Word::new("BEER").unwrap()]);
        let mut input = Cursor::new(b"beer\n".to_vec());
        let mut out = Vec::new();
        let config = GameConfig {
            clear_screen: true,
            ..config(5)
        };

        run_session(&mut supplier, &config, &mut input, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(CLEAR_SCREEN));
    }
}
