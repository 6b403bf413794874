//! Round simulation command
//!
//! Auto-plays many rounds with a fixed letter-frequency guesser and reports
//! how the word list behaves: win rate, incorrect-guess distribution, and the
//! words that nearly or actually hang the guesser.

use crate::core::{Game, Letter, Phase, Word};
use crate::wordlists::loader::pick_word;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// English letters in frequency order, the guesser's fixed strategy
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    /// Seed for word picks; omit for a fresh run each time
    pub seed: Option<u64>,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize) -> Self {
        Self { rounds, seed: None }
    }
}

/// Outcome of one auto-played round
#[derive(Debug, Clone)]
struct RoundOutcome {
    word: String,
    won: bool,
    incorrect: usize,
}

/// Aggregate result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_incorrect: f64,
    /// Incorrect-guess count per won round (0 through 5)
    pub incorrect_distribution: HashMap<usize, usize>,
    /// Words that cost five or more incorrect guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Auto-play rounds against randomly picked words
///
/// Word picks are sequential (and seedable); the rounds themselves are
/// independent and play in parallel.
#[must_use]
pub fn run_simulation(words: &[Word], config: &SimulationConfig) -> SimulationResult {
    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let targets: Vec<Word> = (0..config.rounds)
        .map(|_| pick_word(words, &mut rng))
        .collect();

    // Progress bar
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = targets
        .into_par_iter()
        .map(|word| {
            let outcome = play_round(word);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_rounds = outcomes.len();

    let wins = outcomes.iter().filter(|o| o.won).count();
    let losses = total_rounds - wins;

    let total_incorrect: usize = outcomes.iter().map(|o| o.incorrect).sum();
    let average_incorrect = if total_rounds > 0 {
        total_incorrect as f64 / total_rounds as f64
    } else {
        0.0
    };

    let mut incorrect_distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *incorrect_distribution.entry(outcome.incorrect).or_insert(0) += 1;
    }

    let mut hardest: HashMap<String, usize> = HashMap::new();
    for outcome in outcomes.iter().filter(|o| o.incorrect >= 5) {
        let entry = hardest.entry(outcome.word.clone()).or_insert(0);
        *entry = (*entry).max(outcome.incorrect);
    }
    let mut hardest_words: Vec<(String, usize)> = hardest.into_iter().collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    SimulationResult {
        total_rounds,
        wins,
        losses,
        average_incorrect,
        incorrect_distribution,
        hardest_words,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64(),
    }
}

/// Play one round with the frequency-order guesser
fn play_round(word: Word) -> RoundOutcome {
    let text = word.text().to_string();
    let mut game = Game::new(word);

    for letter in FREQUENCY_ORDER.chars().filter_map(|c| Letter::new(c).ok()) {
        if game.phase() != Phase::Playing {
            break;
        }
        game.guess(letter);
    }

    RoundOutcome {
        word: text,
        won: game.is_winner(),
        incorrect: game.incorrect_letters().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn frequency_order_covers_alphabet() {
        let unique: std::collections::HashSet<char> = FREQUENCY_ORDER.chars().collect();
        assert_eq!(FREQUENCY_ORDER.len(), 26);
        assert_eq!(unique.len(), 26);
        assert!(FREQUENCY_ORDER.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn play_round_wins_common_letters() {
        // "tea" falls to the first three frequency guesses: e, t, a
        let outcome = play_round(Word::new("tea").unwrap());
        assert!(outcome.won);
        assert_eq!(outcome.incorrect, 0);
    }

    #[test]
    fn play_round_loses_rare_letters() {
        // "jazz": only 'a' lands before six misses pile up
        let outcome = play_round(Word::new("jazz").unwrap());
        assert!(!outcome.won);
        assert_eq!(outcome.incorrect, 6);
    }

    #[test]
    fn simulation_counts_add_up() {
        let words = words_from_slice(&["tea", "anchor", "jazz", "orange"]);
        let config = SimulationConfig {
            rounds: 20,
            seed: Some(42),
        };

        let result = run_simulation(&words, &config);

        assert_eq!(result.total_rounds, 20);
        assert_eq!(result.wins + result.losses, 20);

        let distribution_sum: usize = result.incorrect_distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
    }

    #[test]
    fn simulation_is_reproducible_with_seed() {
        let words = words_from_slice(&["tea", "anchor", "jazz", "orange", "pillow"]);
        let config = SimulationConfig {
            rounds: 30,
            seed: Some(7),
        };

        let first = run_simulation(&words, &config);
        let second = run_simulation(&words, &config);

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.losses, second.losses);
        assert_eq!(first.hardest_words, second.hardest_words);
    }

    #[test]
    fn simulation_empty_word_list_uses_fallback() {
        // Every round plays the fallback word, so outcomes are identical
        let config = SimulationConfig {
            rounds: 5,
            seed: Some(1),
        };

        let result = run_simulation(&[], &config);

        // The frequency guesser misses on e, t, o, i, n, s before reaching
        // the word's rarer letters, so the fallback word always loses.
        assert_eq!(result.total_rounds, 5);
        assert_eq!(result.losses, 5);
        assert_eq!(result.hardest_words, vec![("fallback".to_string(), 6)]);
    }

    #[test]
    fn simulation_zero_rounds() {
        let words = words_from_slice(&["tea"]);
        let config = SimulationConfig {
            rounds: 0,
            seed: Some(1),
        };

        let result = run_simulation(&words, &config);

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.losses, 0);
        assert!(result.incorrect_distribution.is_empty());
    }
}
