//! Sqwordle - CLI
//!
//! Daily Pokémon guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sqwordle::{
    clock::{Clock, SystemClock},
    commands::{run_simple, share_reply, status_report},
    config::{DEFAULT_ORIGIN, DEFAULT_UTC_OFFSET, GameConfig},
    game::{DEFAULT_MAX_ATTEMPTS, Session},
    logging::init_logging,
    output::print_status_report,
    storage::{FileStorage, MemoryStorage, Storage},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "sqwordle",
    about = "Catch today's pokémon in a daily word-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Day 1 of the game: YYYY-MM-DD (midnight at --utc-offset) or an RFC 3339 instant
    #[arg(long, global = true, env = "SQWORDLE_START_DATE")]
    start_date: Option<String>,

    /// UTC offset that day boundaries follow, e.g. -05:00 or UTC
    #[arg(
        long,
        global = true,
        env = "SQWORDLE_UTC_OFFSET",
        default_value = DEFAULT_UTC_OFFSET,
        allow_hyphen_values = true
    )]
    utc_offset: String,

    /// Guesses allowed per game
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// File that keeps each day's progress
    #[arg(
        long,
        global = true,
        env = "SQWORDLE_STATE_FILE",
        default_value = "sqwordle-state.json"
    )]
    state_file: PathBuf,

    /// Keep progress in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Link appended to shared results
    #[arg(long, global = true, env = "SQWORDLE_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show today's progress and the time until the next game
    Status,

    /// Print the shareable summary of today's finished game
    Share,
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}")),
    }
}

fn open_storage(cli: &Cli) -> Box<dyn Storage> {
    if cli.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(FileStorage::new(cli.state_file.clone()))
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let start_date = cli
        .start_date
        .as_deref()
        .context("missing start date: pass --start-date or set SQWORDLE_START_DATE")?;

    GameConfig::from_parts(
        start_date,
        &cli.utc_offset,
        cli.max_attempts,
        cli.origin.clone(),
    )
    .context("invalid game configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it only logs when given a file
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        init_logging(cli.verbose, cli.log_file.as_deref())
            .context("failed to initialize logging")?;
    }

    let config = load_config(&cli)?;
    let words = load_words(&cli.wordlist)?;
    let clock = SystemClock;

    let game = config
        .game_at(&clock, &words)
        .context("could not resolve today's game")?;
    info!(day = game.day(), "resolved today's game");
    let mut session = Session::load(game, open_storage(&cli));

    match command {
        Commands::Play => {
            use sqwordle::interactive::{App, run_tui};

            run_tui(App::new(session, config, words, clock))
        }
        Commands::Simple => Ok(run_simple(&mut session, &clock, &config.origin)?),
        Commands::Status => {
            print_status_report(&status_report(&session, clock.now()));
            Ok(())
        }
        Commands::Share => {
            println!("{}", share_reply(&session, &config.origin));
            Ok(())
        }
    }
}
