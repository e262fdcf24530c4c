//! Akshara Wordle - CLI
//!
//! Sanskrit Wordle in the terminal, plus tools to compare and decompose words.

use akshara_wordle::{
    commands::{compare_words, decompose_word, run_play, summarize_entries},
    config::GameConfig,
    core::Devanagari,
    logging,
    output::{print_comparison, print_decomposition, print_summary},
    wordlists::{Lexicon, WORDS, loader::read_entries},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "akshara_wordle",
    about = "Sanskrit Wordle: feedback per akshara, with svara and vyanjana scored apart",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Comma-separated word list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Comma-separated list to draw secrets from (default: the word list)
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    /// Number of aksharas in the secret word
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Guesses allowed per game
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Skip the multiplicity correction pass
    #[arg(long, global = true)]
    no_degrade: bool,

    /// Mark positions whose svara and vyanjana are both elsewhere as mismatched
    #[arg(long, global = true)]
    mismatch: bool,

    /// Seed for secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Compare a guess against a secret
    Compare {
        secret: String,
        guess: String,

        /// Also show feedback before multiplicity correction
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a word splits into aksharas, svaras and vyanjanas
    Decompose { word: String },

    /// Summarize the word list
    Stats {
        /// List rejected entries
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Build the configuration: file (or defaults), then command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(path) = &cli.wordlist {
        config.wordlist = Some(path.clone());
    }
    if let Some(path) = &cli.secrets {
        config.secrets = Some(path.clone());
    }
    if let Some(length) = cli.length {
        config.word_length = length;
    }
    if let Some(attempts) = cli.attempts {
        config.max_attempts = attempts;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.no_degrade {
        config.policy.degrade = false;
    }
    if cli.mismatch {
        config.policy.flag_mismatch = true;
    }

    config.validate()?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn load_lexicon(config: &GameConfig) -> Result<Lexicon> {
    match &config.wordlist {
        Some(path) => Lexicon::from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(Lexicon::embedded()),
    }
}

fn load_secrets(config: &GameConfig) -> Result<Option<Lexicon>> {
    config
        .secrets
        .as_ref()
        .map(|path| {
            Lexicon::from_file(path)
                .with_context(|| format!("failed to read secret list {}", path.display()))
        })
        .transpose()
}

fn load_entries(config: &GameConfig) -> Result<Vec<String>> {
    match &config.wordlist {
        Some(path) => read_entries(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(WORDS.iter().map(ToString::to_string).collect()),
    }
}

fn main() -> Result<()> {
    logging::init("warn");

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let lexicon = load_lexicon(&config)?;
            let secrets = load_secrets(&config)?;
            run_play(&config, &lexicon, secrets.as_ref().unwrap_or(&lexicon))?;
        }
        Commands::Compare {
            secret,
            guess,
            verbose,
        } => {
            let report = compare_words(&secret, &guess, config.policy)?;
            print_comparison(&report, verbose);
        }
        Commands::Decompose { word } => {
            let report = decompose_word(&word, &Devanagari)?;
            print_decomposition(&report);
        }
        Commands::Stats { verbose } => {
            let entries = load_entries(&config)?;
            let summary = summarize_entries(&entries, true);
            print_summary(&summary, verbose);
        }
    }

    Ok(())
}
