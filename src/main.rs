//! Hangman - CLI
//!
//! Terminal hangman with TUI and line-based CLI modes, plus a simulation
//! command for evaluating the word list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::Word,
    interactive::{App, run_tui},
    output::print_simulation_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman - guess the word before the drawing is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Auto-play rounds with a letter-frequency guesser and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Seed for reproducible word picks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list based on the -w flag
///
/// An unreadable file degrades to an empty list - and so to the fallback
/// word - rather than an error: the game never refuses to start over its
/// word source.
fn load_words(wordlist_mode: &str) -> Vec<Word> {
    match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => match load_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Warning: could not read wordlist '{path}' ({e}); using the fallback word");
                Vec::new()
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load word list based on -w flag
    let words = load_words(&cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(words)),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { rounds, seed } => {
            let config = SimulationConfig { rounds, seed };
            let result = run_simulation(&words, &config);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
