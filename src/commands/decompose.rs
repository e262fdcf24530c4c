//! Decompose command
//!
//! Shows how a word splits into aksharas, and each akshara into svara and vyanjanas.

use crate::core::{ANUSVARA, Akshara, Decomposer, WordError};
use crate::error::Result;

/// One akshara of a decomposed word
pub struct AksharaRow {
    pub akshara: String,
    pub vinyaasa: Vec<String>,
    pub svara: String,
    pub vyanjanas: Vec<String>,
}

/// Result of decomposing a word
pub struct DecompositionReport {
    pub word: String,
    pub rows: Vec<AksharaRow>,
    /// A symbol that keeps the word out of play, if any
    pub unsupported: Option<&'static str>,
}

/// Decompose a word with the given service
///
/// Words with an anusvara are still decomposed, and flagged as unsupported.
///
/// # Errors
///
/// Returns an error if the word cannot be decomposed.
pub fn decompose_word(text: &str, decomposer: &dyn Decomposer) -> Result<DecompositionReport> {
    let mut rows = Vec::new();
    let mut unsupported = None;

    for akshara_text in decomposer.aksharas(text).map_err(WordError::from)? {
        let vinyaasa = decomposer.vinyaasa(&akshara_text).map_err(WordError::from)?;
        let akshara = Akshara::from_vinyaasa(akshara_text, vinyaasa).map_err(WordError::from)?;

        if akshara.has_symbol(ANUSVARA) {
            unsupported = Some(ANUSVARA);
        }

        rows.push(AksharaRow {
            akshara: akshara.text().to_string(),
            vinyaasa: akshara.vinyaasa().to_vec(),
            svara: akshara.svara().to_string(),
            vyanjanas: akshara.vyanjanas().to_vec(),
        });
    }

    Ok(DecompositionReport {
        word: text.trim().to_string(),
        rows,
        unsupported,
    })
}
