//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI.

use crate::core::{Game, GuessOutcome, Letter, Phase, Word};
use crate::output::formatters::{gallows, letter_list, masked_word, revealed_word};
use crate::wordlists::loader::pick_word;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hangman - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Six wrong letters and the drawing is complete - game over.\n");
    println!("Guesses are lowercase a-z. Commands: 'new' for a new round, 'quit' to exit.\n");

    let mut game = Game::new(pick_word(words, &mut rand::rng()));

    loop {
        let verdict = game.verdict();

        println!("{}", gallows(verdict.incorrect.len()));
        println!("\nWord:  {}", masked_word(&game).bold());
        if !verdict.incorrect.is_empty() {
            println!("Wrong: {}", letter_list(&verdict.incorrect).red());
        }
        println!("Misses left: {}\n", game.remaining_misses());

        match game.phase() {
            Phase::Won => {
                print_win_banner(&game);
                if !prompt_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.restart(pick_word(words, &mut rand::rng()));
                println!("\n🔄 New round started!\n");
            }
            Phase::Lost => {
                print_loss_banner(&game);
                if !prompt_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.restart(pick_word(words, &mut rand::rng()));
                println!("\n🔄 New round started!\n");
            }
            Phase::Playing => {
                let input = get_user_input("Guess a letter")?;

                match input.as_str() {
                    "quit" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" => {
                        game.restart(pick_word(words, &mut rand::rng()));
                        println!("\n🔄 New round started!\n");
                    }
                    _ => handle_guess_line(&mut game, &input),
                }
            }
        }
    }
}

fn handle_guess_line(game: &mut Game, input: &str) {
    let mut chars = input.chars();
    let (first, rest) = (chars.next(), chars.next());

    match (first, rest) {
        (Some(c), None) => match Letter::new(c) {
            Ok(letter) => report_outcome(game.guess(letter), letter, game),
            Err(_) => println!("❌ Guesses are single lowercase letters, a-z.\n"),
        },
        _ => println!("❌ One letter at a time (or 'new' / 'quit').\n"),
    }
}

fn report_outcome(outcome: GuessOutcome, letter: Letter, game: &Game) {
    match outcome {
        GuessOutcome::Correct => {
            println!("{}\n", format!("✓ '{letter}' is in the word!").green());
        }
        GuessOutcome::Incorrect => {
            println!(
                "{}\n",
                format!(
                    "✗ '{letter}' is not in the word ({} left)",
                    game.remaining_misses()
                )
                .red()
            );
        }
        GuessOutcome::AlreadyGuessed => {
            println!("Already tried '{letter}'.\n");
        }
        GuessOutcome::RoundOver => {}
    }
}

fn print_win_banner(game: &Game) {
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  Y O U   W O N !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  The word was {} - solved with {} miss{}.",
        game.word().text().to_uppercase().bright_yellow().bold(),
        game.incorrect_letters().len(),
        if game.incorrect_letters().len() == 1 {
            ""
        } else {
            "es"
        }
    );
    println!();
}

fn print_loss_banner(game: &Game) {
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        💀  G A M E   O V E R  💀        ".bright_red().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  The word was {}",
        revealed_word(game.word()).bright_yellow().bold()
    );
    println!();
}

fn prompt_play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
