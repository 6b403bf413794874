//! Target word representation
//!
//! A Word stores the hidden word along with letter position indices for
//! masking and containment checks.

use super::letter::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word substituted when the word list is missing or empty
pub const FALLBACK: &str = "fallback";

/// A target word: non-empty, lowercase ASCII letters only
///
/// Maintains a map of letter positions so containment and reveal queries
/// never rescan the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so word lists may carry either
    /// case. Guesses are not given the same treatment.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// The word used when no word list is available
    ///
    /// # Panics
    /// Will not panic - the fallback literal is a valid word.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK).expect("fallback literal is a valid word")
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false - empty words cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.char_positions.contains_key(&letter.as_byte())
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.char_positions
            .get(&letter.as_byte())
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the word's letters in order, duplicates included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_byte_unchecked)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.text(), "banana");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BANANA").unwrap();
        assert_eq!(word.text(), "banana");

        let word2 = Word::new("BaNaNa").unwrap();
        assert_eq!(word2.text(), "banana");
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cat5").is_err()); // Number
        assert!(Word::new("two words").is_err()); // Space
        assert!(Word::new("re-do").is_err()); // Punctuation
        assert!(Word::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn word_fallback_literal() {
        let word = Word::fallback();
        assert_eq!(word.text(), FALLBACK);
        assert_eq!(word.text(), "fallback");
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("banana").unwrap();
        assert!(word.has_letter(Letter::new('b').unwrap()));
        assert!(word.has_letter(Letter::new('a').unwrap()));
        assert!(word.has_letter(Letter::new('n').unwrap()));
        assert!(!word.has_letter(Letter::new('z').unwrap()));
    }

    #[test]
    fn word_positions_of() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.positions_of(Letter::new('b').unwrap()), &[0]);
        assert_eq!(word.positions_of(Letter::new('a').unwrap()), &[1, 3, 5]);
        assert_eq!(word.positions_of(Letter::new('n').unwrap()), &[2, 4]);
        assert_eq!(word.positions_of(Letter::new('z').unwrap()), &[]);
    }

    #[test]
    fn word_letters_in_order() {
        let word = Word::new("cat").unwrap();
        let letters: String = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "cat");
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("cat").unwrap();
        let word3 = Word::new("CAT").unwrap();
        let word4 = Word::new("dog").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
