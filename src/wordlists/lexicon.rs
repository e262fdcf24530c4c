//! Dictionary of playable words
//!
//! Answers membership queries for guesses and picks secrets of a given length.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// A deduplicated collection of valid words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    texts: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon, keeping the first occurrence of any repeated word
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut texts = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| texts.insert(word.text().to_string()))
            .collect();

        Self { words, texts }
    }

    /// Lexicon over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Lexicon over a comma-separated word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(load_from_file(path)?))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check if a word is in the dictionary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.texts.contains(text.trim())
    }

    /// All words with exactly `length` aksharas
    #[must_use]
    pub fn with_length(&self, length: usize) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.akshara_count() == length)
            .collect()
    }

    /// Pick a random word with exactly `length` aksharas
    ///
    /// Returns `None` if no word has that length.
    pub fn random_with_length<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.with_length(length).choose(rng).copied()
    }

    /// Count words by akshara count
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        self.words
            .par_iter()
            .map(Word::akshara_count)
            .fold(BTreeMap::new, |mut counts, length| {
                *counts.entry(length).or_insert(0) += 1;
                counts
            })
            .reduce(BTreeMap::new, |mut left, right| {
                for (length, count) in right {
                    *left.entry(length).or_insert(0) += count;
                }
                left
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::new(words_from_slice(words))
    }

    #[test]
    fn lexicon_deduplicates() {
        let lex = lexicon(&["राम", "सीता", "राम"]);
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.words()[0].text(), "राम");
    }

    #[test]
    fn lexicon_contains() {
        let lex = lexicon(&["राघव", "जानकी"]);
        assert!(lex.contains("राघव"));
        assert!(lex.contains(" जानकी "));
        assert!(!lex.contains("रावण"));
    }

    #[test]
    fn lexicon_with_length() {
        let lex = lexicon(&["राम", "राघव", "दशरथ", "जानकी"]);
        let three: Vec<&str> = lex.with_length(3).iter().map(|w| w.text()).collect();
        assert_eq!(three, ["राघव", "जानकी"]);
        assert!(lex.with_length(6).is_empty());
    }

    #[test]
    fn lexicon_random_with_length() {
        let lex = lexicon(&["राम", "राघव", "दशरथ", "जानकी"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = lex.random_with_length(3, &mut rng).unwrap();
            assert_eq!(word.akshara_count(), 3);
        }
        assert!(lex.random_with_length(5, &mut rng).is_none());
    }

    #[test]
    fn lexicon_length_histogram() {
        let lex = lexicon(&["राम", "सीता", "राघव", "दशरथ", "जानकी"]);
        let histogram = lex.length_histogram();
        assert_eq!(histogram.get(&2), Some(&2));
        assert_eq!(histogram.get(&3), Some(&2));
        assert_eq!(histogram.get(&4), Some(&1));
        assert_eq!(histogram.values().sum::<usize>(), lex.len());
    }

    #[test]
    fn embedded_lexicon_has_three_akshara_words() {
        let lex = Lexicon::embedded();
        assert!(lex.contains("मीनाक्षी"));
        assert!(!lex.with_length(3).is_empty());
    }
}
