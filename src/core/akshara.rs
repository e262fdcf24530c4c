//! Akshara representation
//!
//! An akshara is one svara plus an ordered cluster of zero or more vyanjanas.

use super::decompose::{DecompositionError, is_svara};
use std::fmt;

/// A single syllabic unit split into its svara and vyanjanas
///
/// `क्षी` has vyanjanas `[क्, ष्]` and svara `ई`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Akshara {
    text: String,
    vinyaasa: Vec<String>,
    svara: String,
    vyanjanas: Vec<String>,
}

impl Akshara {
    /// Build an akshara from its text and the sub-symbols it decomposes into
    ///
    /// Exactly one sub-symbol must be a svara; every other sub-symbol is a vyanjana.
    ///
    /// # Errors
    /// Returns `DecompositionError::NoSvara` or `DecompositionError::MultipleSvaras`
    /// if the vinyaasa does not contain exactly one svara.
    ///
    /// # Examples
    /// ```
    /// use akshara_wordle::core::Akshara;
    ///
    /// let vinyaasa = vec!["क्".to_string(), "ष्".to_string(), "ई".to_string()];
    /// let akshara = Akshara::from_vinyaasa("क्षी", vinyaasa).unwrap();
    /// assert_eq!(akshara.svara(), "ई");
    /// assert_eq!(akshara.vyanjanas(), ["क्", "ष्"]);
    /// ```
    pub fn from_vinyaasa(
        text: impl Into<String>,
        vinyaasa: Vec<String>,
    ) -> Result<Self, DecompositionError> {
        let text = text.into();

        let mut svaras = vinyaasa.iter().filter(|symbol| is_svara(symbol));
        let svara = match (svaras.next(), svaras.next()) {
            (Some(svara), None) => svara.clone(),
            (None, _) => return Err(DecompositionError::NoSvara(text)),
            (Some(_), Some(_)) => return Err(DecompositionError::MultipleSvaras(text)),
        };

        let vyanjanas = vinyaasa
            .iter()
            .filter(|symbol| !is_svara(symbol))
            .cloned()
            .collect();

        Ok(Self {
            text,
            vinyaasa,
            svara,
            vyanjanas,
        })
    }

    /// Get the akshara as written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the ordered sub-symbols, svara included
    #[inline]
    #[must_use]
    pub fn vinyaasa(&self) -> &[String] {
        &self.vinyaasa
    }

    #[inline]
    #[must_use]
    pub fn svara(&self) -> &str {
        &self.svara
    }

    /// Get the vyanjana cluster (empty for a bare vowel)
    #[inline]
    #[must_use]
    pub fn vyanjanas(&self) -> &[String] {
        &self.vyanjanas
    }

    /// Check if the cluster contains a vyanjana
    #[inline]
    #[must_use]
    pub fn has_vyanjana(&self, vyanjana: &str) -> bool {
        self.vyanjanas.iter().any(|v| v == vyanjana)
    }

    /// Check if the vinyaasa contains a sub-symbol
    #[inline]
    #[must_use]
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.vinyaasa.iter().any(|s| s == symbol)
    }

    /// The svara as a one-element slice, so both sides can be walked alike
    #[inline]
    pub(crate) fn svara_slice(&self) -> &[String] {
        std::slice::from_ref(&self.svara)
    }
}

impl fmt::Display for Akshara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn akshara_with_cluster() {
        let akshara = Akshara::from_vinyaasa("क्षी", symbols(&["क्", "ष्", "ई"])).unwrap();
        assert_eq!(akshara.text(), "क्षी");
        assert_eq!(akshara.svara(), "ई");
        assert_eq!(akshara.vyanjanas(), ["क्", "ष्"]);
        assert!(akshara.has_vyanjana("ष्"));
        assert!(!akshara.has_vyanjana("म्"));
    }

    #[test]
    fn akshara_bare_vowel_has_empty_cluster() {
        let akshara = Akshara::from_vinyaasa("अ", symbols(&["अ"])).unwrap();
        assert_eq!(akshara.svara(), "अ");
        assert!(akshara.vyanjanas().is_empty());
    }

    #[test]
    fn akshara_trailing_symbols_are_vyanjanas() {
        let akshara = Akshara::from_vinyaasa("दुः", symbols(&["द्", "उ", "ः"])).unwrap();
        assert_eq!(akshara.svara(), "उ");
        assert_eq!(akshara.vyanjanas(), ["द्", "ः"]);
        assert_eq!(akshara.vinyaasa(), ["द्", "उ", "ः"]);
    }

    #[test]
    fn akshara_requires_exactly_one_svara() {
        assert_eq!(
            Akshara::from_vinyaasa("क्", symbols(&["क्"])),
            Err(DecompositionError::NoSvara("क्".to_string()))
        );
        assert_eq!(
            Akshara::from_vinyaasa("आई", symbols(&["आ", "ई"])),
            Err(DecompositionError::MultipleSvaras("आई".to_string()))
        );
    }

    #[test]
    fn akshara_svara_slice() {
        let akshara = Akshara::from_vinyaasa("मी", symbols(&["म्", "ई"])).unwrap();
        assert_eq!(akshara.svara_slice(), ["ई"]);
    }

    #[test]
    fn akshara_display() {
        let akshara = Akshara::from_vinyaasa("ना", symbols(&["न्", "आ"])).unwrap();
        assert_eq!(format!("{akshara}"), "ना");
    }
}
