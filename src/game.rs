//! Single-player game session
//!
//! Tracks turns against one secret word. Guesses are validated before they are
//! compared, and a rejected guess does not use up an attempt.

use crate::config::GameConfig;
use crate::core::{CompareError, ComparePolicy, Comparator, Feedback, Word, WordError};
use crate::wordlists::Lexicon;
use thiserror::Error;
use tracing::info;

/// Reasons a guess is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Word(#[from] WordError),

    #[error("word has {got} aksharas, expected {expected}")]
    WrongLength { expected: usize, got: usize },

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),

    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// State of the game after the latest turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress { remaining: usize },
    Won { attempts: usize, score: usize },
    Lost,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone)]
pub struct Turn {
    guess: Word,
    feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    max_attempts: usize,
    policy: ComparePolicy,
    turns: Vec<Turn>,
}

impl Game {
    /// Start a game against `secret`
    ///
    /// # Errors
    /// Returns `GameError::WrongLength` if the secret does not have the configured
    /// number of aksharas.
    pub fn new(secret: Word, config: &GameConfig) -> Result<Self, GameError> {
        if secret.akshara_count() != config.word_length {
            return Err(GameError::WrongLength {
                expected: config.word_length,
                got: secret.akshara_count(),
            });
        }

        info!(secret = %secret, "new game");

        Ok(Self {
            secret,
            max_attempts: config.max_attempts,
            policy: config.policy,
            turns: Vec::new(),
        })
    }

    /// Validate, compare and record a guess
    ///
    /// Checks, in order: the game is still running, the text decomposes, the akshara
    /// count matches, the word is in the dictionary, and it was not guessed before.
    /// The secret itself is always accepted, since it may come from a separate list.
    ///
    /// # Errors
    /// Returns the first `GameError` among those checks.
    pub fn submit(&mut self, guess: &str, lexicon: &Lexicon) -> Result<&Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(guess)?;

        if guess.akshara_count() != self.secret.akshara_count() {
            return Err(GameError::WrongLength {
                expected: self.secret.akshara_count(),
                got: guess.akshara_count(),
            });
        }
        if guess.text() != self.secret.text() && !lexicon.contains(guess.text()) {
            return Err(GameError::NotInDictionary(guess.text().to_string()));
        }
        if self.turns.iter().any(|turn| turn.guess.text() == guess.text()) {
            return Err(GameError::AlreadyGuessed(guess.text().to_string()));
        }

        let feedback = Comparator::new(&self.secret, &guess)?
            .with_policy(self.policy)
            .compare();

        info!(
            attempt = self.turns.len() + 1,
            guess = %guess,
            feedback = %feedback,
            "guess accepted"
        );

        self.turns.push(Turn { guess, feedback });

        match self.outcome() {
            Outcome::Won { attempts, score } => {
                info!(secret = %self.secret, attempts, score, "game won");
            }
            Outcome::Lost => info!(secret = %self.secret, "game lost"),
            Outcome::InProgress { .. } => {}
        }

        Ok(&self.turns[self.turns.len() - 1])
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let attempts = self.turns.len();

        if self.turns.last().is_some_and(|turn| turn.feedback.is_solved()) {
            Outcome::Won {
                attempts,
                score: self.max_attempts - attempts + 1,
            }
        } else if attempts >= self.max_attempts {
            Outcome::Lost
        } else {
            Outcome::InProgress {
                remaining: self.max_attempts - attempts,
            }
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self.outcome(), Outcome::InProgress { .. })
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Discard the last turn, if any
    pub fn undo(&mut self) -> Option<Turn> {
        self.turns.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::new(words_from_slice(&[
            "मीनाक्षी", "राघव", "जानकी", "रावण", "कमल", "राम",
        ]))
    }

    fn game(max_attempts: usize) -> Game {
        let config = GameConfig {
            max_attempts,
            ..GameConfig::default()
        };
        Game::new(Word::new("मीनाक्षी").unwrap(), &config).unwrap()
    }

    #[test]
    fn secret_must_match_word_length() {
        let result = Game::new(Word::new("राम").unwrap(), &GameConfig::default());
        assert_eq!(
            result.unwrap_err(),
            GameError::WrongLength {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn winning_guess() {
        let lex = lexicon();
        let mut game = game(10);

        game.submit("राघव", &lex).unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress { remaining: 9 });

        let turn = game.submit("मीनाक्षी", &lex).unwrap();
        assert!(turn.feedback().is_solved());
        assert_eq!(
            game.outcome(),
            Outcome::Won {
                attempts: 2,
                score: 9
            }
        );
        assert!(game.is_over());
        assert_eq!(game.submit("जानकी", &lex).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn losing_after_max_attempts() {
        let lex = lexicon();
        let mut game = game(2);

        game.submit("राघव", &lex).unwrap();
        game.submit("जानकी", &lex).unwrap();
        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(game.is_over());
    }

    #[test]
    fn rejected_guesses_do_not_use_attempts() {
        let lex = lexicon();
        let mut game = game(10);

        assert!(matches!(
            game.submit("raghava", &lex),
            Err(GameError::Word(_))
        ));
        assert_eq!(
            game.submit("राम", &lex).unwrap_err(),
            GameError::WrongLength {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            game.submit("सुमित्रा", &lex).unwrap_err(),
            GameError::NotInDictionary("सुमित्रा".to_string())
        );

        game.submit("राघव", &lex).unwrap();
        assert_eq!(
            game.submit("राघव", &lex).unwrap_err(),
            GameError::AlreadyGuessed("राघव".to_string())
        );

        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.outcome(), Outcome::InProgress { remaining: 9 });
    }

    #[test]
    fn secret_outside_dictionary_can_be_guessed() {
        let lex = Lexicon::new(words_from_slice(&["राघव", "जानकी"]));
        let mut game = Game::new(Word::new("कौसल्या").unwrap(), &GameConfig::default()).unwrap();

        assert_eq!(
            game.submit("मीनाक्षी", &lex).unwrap_err(),
            GameError::NotInDictionary("मीनाक्षी".to_string())
        );
        game.submit("जानकी", &lex).unwrap();
        assert!(game.submit("कौसल्या", &lex).unwrap().feedback().is_solved());
        assert!(matches!(game.outcome(), Outcome::Won { attempts: 2, .. }));
    }

    #[test]
    fn undo_restores_previous_state() {
        let lex = lexicon();
        let mut game = game(1);

        game.submit("राघव", &lex).unwrap();
        assert!(game.is_over());

        let undone = game.undo().unwrap();
        assert_eq!(undone.guess().text(), "राघव");
        assert!(!game.is_over());
        assert!(game.undo().is_none());
    }

    #[test]
    fn policy_from_config_is_applied() {
        let config = GameConfig {
            policy: ComparePolicy {
                degrade: true,
                flag_mismatch: true,
            },
            ..GameConfig::default()
        };
        let lex = Lexicon::new(words_from_slice(&["राघव", "घराव"]));
        let mut game = Game::new(Word::new("राघव").unwrap(), &config).unwrap();

        let turn = game.submit("घराव", &lex).unwrap();
        assert_eq!(turn.feedback().to_codes(), "RR RR GG");
    }
}
