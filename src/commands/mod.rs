//! Command implementations

pub mod compare;
pub mod decompose;
pub mod play;
pub mod stats;

pub use compare::{ComparisonReport, compare_words};
pub use decompose::{AksharaRow, DecompositionReport, decompose_word};
pub use play::{pick_secret, run_play};
pub use stats::{ListSummary, summarize_entries};
