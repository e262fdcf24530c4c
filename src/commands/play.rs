//! Interactive game mode
//!
//! Text-based game against a random secret. Secrets may come from their own list,
//! while guesses are checked against the full dictionary.

use crate::config::GameConfig;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{Game, Outcome};
use crate::output::{print_board, print_legend};
use crate::wordlists::Lexicon;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// A line typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    Help,
    Guess(String),
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "help" | "h" | "?" => Some(Self::Help),
            _ => Some(Self::Guess(line.to_string())),
        }
    }
}

/// Pick a secret with the configured number of aksharas
///
/// # Errors
///
/// Returns `Error::NoSecret` if the list has no word of that length.
pub fn pick_secret(lexicon: &Lexicon, length: usize, rng: &mut StdRng) -> Result<Word> {
    lexicon
        .random_with_length(length, rng)
        .cloned()
        .ok_or(Error::NoSecret(length))
}

fn new_game(config: &GameConfig, secrets: &Lexicon, rng: &mut StdRng) -> Result<Game> {
    let secret = pick_secret(secrets, config.word_length, rng)?;
    Ok(Game::new(secret, config)?)
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if `secrets` has
/// no word of the configured length.
#[allow(clippy::too_many_lines)] // Interactive game loop handles every command inline
pub fn run_play(config: &GameConfig, lexicon: &Lexicon, secrets: &Lexicon) -> Result<()> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Sanskrit Wordle                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-akshara word in {} attempts. Type it in Devanagari.\n",
        config.word_length, config.max_attempts
    );
    print_legend();
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut game = new_game(config, secrets, &mut rng)?;

    loop {
        let attempt = game.turns().len() + 1;
        let Some(input) = Input::parse(&get_user_input(&format!("Guess {attempt}"))?) else {
            continue;
        };

        match input {
            Input::Quit => {
                println!("\n👋 The word was {}.\n", game.secret().text().bright_yellow());
                return Ok(());
            }
            Input::New => {
                game = new_game(config, secrets, &mut rng)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Undo => {
                if game.undo().is_some() {
                    println!("✓ Undone! Back to guess {}\n", game.turns().len() + 1);
                    print_board(&game);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            Input::Help => {
                print_legend();
                continue;
            }
            Input::Guess(text) => {
                if let Err(e) = game.submit(&text, lexicon) {
                    println!("❌ {e}\n");
                    continue;
                }
            }
        }

        println!();
        print_board(&game);
        println!();

        match game.outcome() {
            Outcome::InProgress { remaining } => {
                println!("{remaining} attempts left\n");
                continue;
            }
            Outcome::Won { attempts, score } => {
                println!("{}", "═".repeat(60).bright_cyan());
                println!("{}", "    🎉  S O L V E D !  🎉".bright_green().bold());
                println!("{}", "═".repeat(60).bright_cyan());
                println!(
                    "\n  Found {} in {} {}, score {}\n",
                    game.secret().text().bright_yellow().bold(),
                    attempts.to_string().bright_cyan().bold(),
                    if attempts == 1 { "guess" } else { "guesses" },
                    score.to_string().bright_green().bold()
                );
            }
            Outcome::Lost => {
                println!(
                    "{} The word was {}.\n",
                    "Out of attempts!".red().bold(),
                    game.secret().text().bright_yellow().bold()
                );
            }
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                game = new_game(config, secrets, &mut rng)?;
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }

    Ok(input.trim().to_string())
}
