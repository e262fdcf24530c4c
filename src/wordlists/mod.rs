//! Word lists for Sanskrit Wordle
//!
//! Provides the embedded dictionary, file loading, and the `Lexicon` used to validate
//! guesses and pick secrets.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use lexicon::Lexicon;
