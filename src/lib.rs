//! Akshara Wordle
//!
//! A Sanskrit Wordle engine. Words are compared akshara by akshara, and every akshara
//! gets two statuses: one for its vyanjana cluster and one for its svara.
//!
//! # Quick Start
//!
//! ```rust
//! use akshara_wordle::core::{Comparator, Word};
//!
//! let secret = Word::new("मीनाक्षी").unwrap();
//! let guess = Word::new("कानाक्षी").unwrap();
//!
//! let feedback = Comparator::new(&secret, &guess).unwrap().compare();
//! assert_eq!(feedback.to_codes(), "-- GG GG");
//! ```

// Core domain types
pub mod core;

// Game session
pub mod game;

// Configuration
pub mod config;

// Crate-level errors
pub mod error;

// Logging setup
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
