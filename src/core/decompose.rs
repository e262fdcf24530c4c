//! Devanagari syllable decomposition
//!
//! Splits a word into aksharas, and an akshara into its vinyaasa: the ordered
//! phonemic sub-symbols from which the svara and vyanjanas are read.
//!
//! - Consonants are written as consonant + virama (`क्`)
//! - Vowel signs are written as their independent svara (`ी` → `ई`)
//! - A consonant with no vowel sign carries the inherent `अ`
//! - Anusvara, chandrabindu and visarga are kept as-is

use thiserror::Error;

/// The fixed set of 14 svaras
pub const SVARAS: [&str; 14] = [
    "अ", "आ", "इ", "ई", "उ", "ऊ", "ऋ", "ॠ", "ऌ", "ॡ", "ए", "ऐ", "ओ", "औ",
];

/// Anusvara, which the word model declines to model
pub const ANUSVARA: &str = "ं";

const INHERENT_SVARA: &str = "अ";
const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';

/// Check whether a sub-symbol is one of the 14 svaras
#[inline]
#[must_use]
pub fn is_svara(symbol: &str) -> bool {
    SVARAS.contains(&symbol)
}

/// Error type for input that cannot be split into aksharas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    #[error("cannot decompose an empty word")]
    Empty,

    #[error("'{ch}' is not a Sanskrit Devanagari character")]
    ForeignCharacter { ch: char },

    #[error("'{ch}' at character {index} has nothing to attach to")]
    Unattached { ch: char, index: usize },

    #[error("vowel '{vowel}' follows a dead consonant")]
    VowelAfterVirama { vowel: char },

    #[error("'{0}' has no svara")]
    NoSvara(String),

    #[error("'{0}' has more than one svara")]
    MultipleSvaras(String),
}

/// A syllable decomposition service
///
/// `Word` depends only on this contract, so other scripts or rule sets can be
/// plugged in without touching the comparison engine.
pub trait Decomposer {
    /// Split a word into its ordered aksharas
    ///
    /// # Errors
    /// Returns `DecompositionError` if the word cannot be parsed.
    fn aksharas(&self, word: &str) -> Result<Vec<String>, DecompositionError>;

    /// Split an akshara into its ordered sub-symbols
    ///
    /// # Errors
    /// Returns `DecompositionError` if the akshara cannot be parsed.
    fn vinyaasa(&self, akshara: &str) -> Result<Vec<String>, DecompositionError>;
}

/// Rule-based decomposer for Sanskrit in Devanagari script
///
/// # Examples
/// ```
/// use akshara_wordle::core::{Decomposer, Devanagari};
///
/// let aksharas = Devanagari.aksharas("मीनाक्षी").unwrap();
/// assert_eq!(aksharas, ["मी", "ना", "क्षी"]);
///
/// let vinyaasa = Devanagari.vinyaasa("क्षी").unwrap();
/// assert_eq!(vinyaasa, ["क्", "ष्", "ई"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Devanagari;

/// Character classes relevant to syllabification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Consonant,
    Vowel(&'static str),
    Sign(&'static str),
    Virama,
    Nukta,
    Modifier,
    Joiner,
}

fn classify(ch: char) -> Option<Class> {
    let class = match ch {
        '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}' => Class::Consonant,
        'अ' => Class::Vowel("अ"),
        'आ' => Class::Vowel("आ"),
        'इ' => Class::Vowel("इ"),
        'ई' => Class::Vowel("ई"),
        'उ' => Class::Vowel("उ"),
        'ऊ' => Class::Vowel("ऊ"),
        'ऋ' => Class::Vowel("ऋ"),
        'ॠ' => Class::Vowel("ॠ"),
        'ऌ' => Class::Vowel("ऌ"),
        'ॡ' => Class::Vowel("ॡ"),
        'ए' => Class::Vowel("ए"),
        'ऐ' => Class::Vowel("ऐ"),
        'ओ' => Class::Vowel("ओ"),
        'औ' => Class::Vowel("औ"),
        '\u{093E}' => Class::Sign("आ"),
        '\u{093F}' => Class::Sign("इ"),
        '\u{0940}' => Class::Sign("ई"),
        '\u{0941}' => Class::Sign("उ"),
        '\u{0942}' => Class::Sign("ऊ"),
        '\u{0943}' => Class::Sign("ऋ"),
        '\u{0944}' => Class::Sign("ॠ"),
        '\u{0962}' => Class::Sign("ऌ"),
        '\u{0963}' => Class::Sign("ॡ"),
        '\u{0947}' => Class::Sign("ए"),
        '\u{0948}' => Class::Sign("ऐ"),
        '\u{094B}' => Class::Sign("ओ"),
        '\u{094C}' => Class::Sign("औ"),
        VIRAMA => Class::Virama,
        NUKTA => Class::Nukta,
        '\u{0901}'..='\u{0903}' => Class::Modifier,
        '\u{200C}' | '\u{200D}' => Class::Joiner,
        _ => return None,
    };
    Some(class)
}

impl Decomposer for Devanagari {
    fn aksharas(&self, word: &str) -> Result<Vec<String>, DecompositionError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DecompositionError::Empty);
        }

        let mut aksharas: Vec<String> = Vec::new();
        // Consonants of the akshara being built
        let mut pending = String::new();
        // Last consonant in `pending` still carries its inherent vowel
        let mut live = false;

        for (index, ch) in word.chars().enumerate() {
            let class = classify(ch).ok_or(DecompositionError::ForeignCharacter { ch })?;

            match class {
                Class::Joiner => {}
                Class::Consonant => {
                    if live {
                        aksharas.push(std::mem::take(&mut pending));
                    }
                    pending.push(ch);
                    live = true;
                }
                Class::Nukta => {
                    if !live || pending.ends_with(NUKTA) {
                        return Err(DecompositionError::Unattached { ch, index });
                    }
                    pending.push(ch);
                }
                Class::Virama => {
                    if !live {
                        return Err(DecompositionError::Unattached { ch, index });
                    }
                    pending.push(ch);
                    live = false;
                }
                Class::Sign(_) => {
                    if !live {
                        return Err(DecompositionError::Unattached { ch, index });
                    }
                    pending.push(ch);
                    aksharas.push(std::mem::take(&mut pending));
                    live = false;
                }
                Class::Vowel(_) => {
                    if live {
                        aksharas.push(std::mem::take(&mut pending));
                        live = false;
                    } else if !pending.is_empty() {
                        return Err(DecompositionError::VowelAfterVirama { vowel: ch });
                    }
                    aksharas.push(ch.to_string());
                }
                Class::Modifier => {
                    if live {
                        aksharas.push(std::mem::take(&mut pending));
                        live = false;
                    }
                    match aksharas.last_mut() {
                        Some(last) if pending.is_empty() => last.push(ch),
                        _ => return Err(DecompositionError::Unattached { ch, index }),
                    }
                }
            }
        }

        if live {
            aksharas.push(pending);
        } else if !pending.is_empty() {
            // Word-final dead consonants close the previous akshara
            match aksharas.last_mut() {
                Some(last) => last.push_str(&pending),
                None => return Err(DecompositionError::NoSvara(word.to_string())),
            }
        }

        Ok(aksharas)
    }

    fn vinyaasa(&self, akshara: &str) -> Result<Vec<String>, DecompositionError> {
        // Input must be exactly one akshara
        if self.aksharas(akshara)?.len() != 1 {
            return Err(DecompositionError::MultipleSvaras(akshara.trim().to_string()));
        }

        let mut symbols = Vec::new();
        let mut chars = akshara
            .trim()
            .chars()
            .filter(|&ch| classify(ch) != Some(Class::Joiner))
            .enumerate()
            .peekable();

        while let Some((index, ch)) = chars.next() {
            match classify(ch) {
                Some(Class::Consonant) => {
                    let mut consonant = String::from(ch);
                    if chars.next_if(|&(_, next)| next == NUKTA).is_some() {
                        consonant.push(NUKTA);
                    }
                    consonant.push(VIRAMA);
                    symbols.push(consonant);

                    match chars.peek().and_then(|&(_, next)| classify(next)) {
                        Some(Class::Virama) => {
                            chars.next();
                        }
                        Some(Class::Sign(svara)) => {
                            chars.next();
                            symbols.push(svara.to_string());
                        }
                        _ => symbols.push(INHERENT_SVARA.to_string()),
                    }
                }
                Some(Class::Vowel(svara)) => symbols.push(svara.to_string()),
                Some(Class::Modifier) => symbols.push(ch.to_string()),
                _ => return Err(DecompositionError::Unattached { ch, index }),
            }
        }

        Ok(symbols)
    }
}
