//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond the hash map implementation. All types here are pure,
//! testable, and have clear state-machine properties.

mod game;
mod letter;
mod word;

pub use game::{Game, GuessOutcome, MAX_INCORRECT, Phase, Verdict};
pub use letter::{Letter, LetterError};
pub use word::{FALLBACK, Word, WordError};
