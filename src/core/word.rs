//! Sanskrit word representation
//!
//! A Word stores its aksharas along with svara and vyanjana position indices for comparison.

use super::akshara::Akshara;
use super::decompose::{ANUSVARA, Decomposer, DecompositionError, Devanagari};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A word decomposed into aksharas, with svara and vyanjana position tracking
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    aksharas: Vec<Akshara>,
    svara_positions: FxHashMap<String, Vec<usize>>,
    vyanjana_positions: FxHashMap<String, Vec<usize>>,
}

/// Error type for invalid words and out-of-range queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error(transparent)]
    Decomposition(#[from] DecompositionError),

    #[error("'{word}' contains '{symbol}', which is not supported")]
    UnsupportedSymbol { word: String, symbol: String },

    #[error("position {index} is out of range for a word of {len} aksharas")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Word {
    /// Create a new Word from a Devanagari string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text cannot be split into aksharas
    /// - The text contains an anusvara
    ///
    /// # Examples
    /// ```
    /// use akshara_wordle::core::Word;
    ///
    /// let word = Word::new("मीनाक्षी").unwrap();
    /// assert_eq!(word.akshara_count(), 3);
    /// assert_eq!(word.svara_signature(), ["ई", "आ", "ई"]);
    ///
    /// assert!(Word::new("meenakshi").is_err());
    /// assert!(Word::new("सिंह").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_decomposer(text, &Devanagari)
    }

    /// Create a new Word using a specific decomposition service
    ///
    /// # Errors
    /// Returns `WordError` if the service rejects the text, if an akshara does not carry
    /// exactly one svara, or if the text contains an anusvara.
    pub fn with_decomposer(
        text: impl Into<String>,
        decomposer: &dyn Decomposer,
    ) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_string();

        if text.contains(ANUSVARA) {
            return Err(WordError::UnsupportedSymbol {
                word: text,
                symbol: ANUSVARA.to_string(),
            });
        }

        let mut aksharas = Vec::new();
        for akshara_text in decomposer.aksharas(&text)? {
            let vinyaasa = decomposer.vinyaasa(&akshara_text)?;
            let akshara = Akshara::from_vinyaasa(akshara_text, vinyaasa)?;

            if akshara.has_symbol(ANUSVARA) {
                return Err(WordError::UnsupportedSymbol {
                    word: text,
                    symbol: ANUSVARA.to_string(),
                });
            }
            aksharas.push(akshara);
        }

        // Build position maps for fast lookup
        let mut svara_positions: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut vyanjana_positions: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, akshara) in aksharas.iter().enumerate() {
            svara_positions
                .entry(akshara.svara().to_string())
                .or_default()
                .push(i);

            for vyanjana in akshara.vyanjanas() {
                let positions = vyanjana_positions.entry(vyanjana.clone()).or_default();
                if positions.last() != Some(&i) {
                    positions.push(i);
                }
            }
        }

        debug!(word = %text, aksharas = aksharas.len(), "decomposed word");

        Ok(Self {
            text,
            aksharas,
            svara_positions,
            vyanjana_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn aksharas(&self) -> &[Akshara] {
        &self.aksharas
    }

    /// Get the aksharas as written, in order
    #[must_use]
    pub fn akshara_texts(&self) -> Vec<&str> {
        self.aksharas.iter().map(Akshara::text).collect()
    }

    #[inline]
    #[must_use]
    pub fn akshara_count(&self) -> usize {
        self.aksharas.len()
    }

    /// Get the akshara at a specific position
    ///
    /// # Errors
    /// Returns `WordError::IndexOutOfRange` if `index >= akshara_count()`
    pub fn akshara_at(&self, index: usize) -> Result<&Akshara, WordError> {
        self.aksharas.get(index).ok_or(WordError::IndexOutOfRange {
            index,
            len: self.aksharas.len(),
        })
    }

    /// Get the svara at a specific position
    ///
    /// # Errors
    /// Returns `WordError::IndexOutOfRange` if `index >= akshara_count()`
    pub fn svara_at(&self, index: usize) -> Result<&str, WordError> {
        self.akshara_at(index).map(Akshara::svara)
    }

    /// Get the vyanjana cluster at a specific position
    ///
    /// # Errors
    /// Returns `WordError::IndexOutOfRange` if `index >= akshara_count()`
    pub fn vyanjanas_at(&self, index: usize) -> Result<&[String], WordError> {
        self.akshara_at(index).map(Akshara::vyanjanas)
    }

    /// Check if the word contains a specific akshara anywhere
    #[must_use]
    pub fn contains_akshara(&self, akshara: &str) -> bool {
        self.aksharas.iter().any(|a| a.text() == akshara)
    }

    #[inline]
    #[must_use]
    pub fn contains_svara(&self, svara: &str) -> bool {
        self.svara_positions.contains_key(svara)
    }

    /// Check if any position's cluster contains a specific vyanjana
    #[inline]
    #[must_use]
    pub fn contains_vyanjana(&self, vyanjana: &str) -> bool {
        self.vyanjana_positions.contains_key(vyanjana)
    }

    /// Get all positions carrying a svara
    ///
    /// Returns an empty slice if the svara doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of_svara(&self, svara: &str) -> &[usize] {
        self.svara_positions
            .get(svara)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Get all positions whose cluster contains a vyanjana
    ///
    /// Each position is listed once, even if the cluster repeats the vyanjana.
    #[inline]
    #[must_use]
    pub fn positions_of_vyanjana(&self, vyanjana: &str) -> &[usize] {
        self.vyanjana_positions
            .get(vyanjana)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Get the svara of every position, in order
    #[must_use]
    pub fn svara_signature(&self) -> Vec<&str> {
        self.aksharas.iter().map(Akshara::svara).collect()
    }

    /// Get the vyanjana cluster of every position, in order
    ///
    /// A position without vyanjanas contributes an empty slice, so the signature
    /// always has one entry per akshara.
    #[must_use]
    pub fn vyanjana_signature(&self) -> Vec<&[String]> {
        self.aksharas.iter().map(Akshara::vyanjanas).collect()
    }

    /// Count each svara across all positions
    pub(crate) fn svara_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for akshara in &self.aksharas {
            *counts.entry(akshara.svara()).or_insert(0) += 1;
        }
        counts
    }

    /// Count each vyanjana across all clusters, repeats within a cluster included
    pub(crate) fn vyanjana_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for vyanjana in self.aksharas.iter().flat_map(Akshara::vyanjanas) {
            *counts.entry(vyanjana.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
