//! Core domain types for Sanskrit Wordle
//!
//! This module contains the word model and the comparison engine. Everything here is
//! pure: words are immutable once built and comparisons share no state.

mod akshara;
mod comparator;
mod decompose;
mod feedback;
mod word;

pub use akshara::Akshara;
pub use comparator::{CompareError, ComparePolicy, Comparator};
pub use decompose::{ANUSVARA, Decomposer, DecompositionError, Devanagari, SVARAS, is_svara};
pub use feedback::{CellStatus, Feedback, PositionResult, Side};
pub use word::{Word, WordError};
