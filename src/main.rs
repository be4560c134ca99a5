//! Sutom - CLI
//!
//! Word-guessing game with TUI and plain console modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use sutom::{
    commands::{DEFAULT_ATTEMPTS, GameConfig, run_check, run_simple},
    interactive::{App, run_tui},
    output::RenderStyle,
};

#[derive(Parser)]
#[command(
    name = "sutom",
    about = "Guess the secret word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of attempts per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    attempts: u32,

    /// Word list: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for the secret word choice, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How guesses are shown in console output
    #[arg(long, global = true, value_enum, default_value_t = RenderStyle::Color)]
    style: RenderStyle,

    /// Do not clear the screen between turns in simple mode
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (text prompts, no TUI)
    Simple,

    /// Evaluate one guess against a given secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            attempt_limit: self.attempts,
            wordlist: self.wordlist.clone(),
            seed: self.seed,
            style: self.style,
            clear_screen: !self.no_clear,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Check { secret, guess } => run_check(&secret, &guess, config.style),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let dictionary = config.dictionary()?;
    let app = App::new(dictionary, config.attempt_limit)?;
    run_tui(app)
}
