//! Word lists for hangman
//!
//! Provides the embedded word list compiled into the binary plus loading and
//! picking utilities.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn words_are_valid() {
        // Every embedded word should be non-empty, lowercase alphabetic
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
