//! Word list loading and picking
//!
//! Functions to load word lists from files or the embedded constant, and to
//! draw a word for a round. Picking never fails: an empty list yields the
//! fallback word.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pick a word uniformly at random for a new round
///
/// An empty list yields the fallback word instead of an error.
pub fn pick_word<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Word {
    words.choose(rng).cloned().unwrap_or_else(Word::fallback)
}

/// The deterministic default pick: the first list entry
///
/// Used where a reproducible word is needed before randomness is drawn.
/// An empty list yields the fallback word.
#[must_use]
pub fn first_word(words: &[Word]) -> Word {
    words.first().cloned().unwrap_or_else(Word::fallback)
}
