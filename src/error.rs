//! Crate-level error type for command implementations

use crate::config::ConfigError;
use crate::core::{CompareError, WordError};
use crate::game::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no word with {0} aksharas in the word list")]
    NoSecret(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
