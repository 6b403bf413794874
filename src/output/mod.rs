//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_simulation_result;
pub use formatters::{gallows, letter_list, masked_word, revealed_word};
