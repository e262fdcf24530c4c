//! Secret/guess comparison
//!
//! Compares two words of equal akshara count and produces a `Feedback`.
//!
//! # Algorithm
//! 1. Resolve: each position independently, svara and vyanjana side apart
//! 2. Degrade: per symbol, downgrade `Present` credits that exceed the symbol's
//!    count in the secret, lowest positions first
//! 3. Mismatch (optional): positions `Present` on both sides become `Mismatch`

use super::akshara::Akshara;
use super::feedback::{CellStatus, Feedback, PositionResult, Side};
use super::word::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for comparisons that cannot be made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("secret has {secret} aksharas but guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Which optional passes run after per-position resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ComparePolicy {
    /// Correct over-credited symbols against their count in the secret
    pub degrade: bool,

    /// Report positions present on both sides as `Mismatch`
    pub flag_mismatch: bool,
}

impl Default for ComparePolicy {
    fn default() -> Self {
        Self {
            degrade: true,
            flag_mismatch: false,
        }
    }
}

impl Side {
    fn symbols(self, akshara: &Akshara) -> &[String] {
        match self {
            Self::Vyanjana => akshara.vyanjanas(),
            Self::Svara => akshara.svara_slice(),
        }
    }
}

/// Comparison of a guess against a secret word
///
/// # Examples
/// ```
/// use akshara_wordle::core::{Comparator, Word};
///
/// let secret = Word::new("मीनाक्षी").unwrap();
/// let guess = Word::new("मीनाक्षी").unwrap();
/// let feedback = Comparator::new(&secret, &guess).unwrap().compare();
///
/// assert!(feedback.is_solved());
/// assert_eq!(feedback.to_codes(), "GG GG GG");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'a> {
    secret: &'a Word,
    guess: &'a Word,
    policy: ComparePolicy,
}

impl<'a> Comparator<'a> {
    /// Create a comparator with the default policy
    ///
    /// # Errors
    /// Returns `CompareError::LengthMismatch` if the words differ in akshara count.
    pub fn new(secret: &'a Word, guess: &'a Word) -> Result<Self, CompareError> {
        if secret.akshara_count() != guess.akshara_count() {
            return Err(CompareError::LengthMismatch {
                secret: secret.akshara_count(),
                guess: guess.akshara_count(),
            });
        }

        Ok(Self {
            secret,
            guess,
            policy: ComparePolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ComparePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> ComparePolicy {
        self.policy
    }

    /// Run the comparison under the configured policy
    ///
    /// Pure: repeated calls return identical feedback.
    #[must_use]
    pub fn compare(&self) -> Feedback {
        let mut feedback = self.resolve();

        if self.policy.degrade {
            self.degrade(feedback.as_mut_slice());
        }

        if self.policy.flag_mismatch {
            for result in feedback.as_mut_slice() {
                if result.vyanjana == CellStatus::Present && result.svara == CellStatus::Present {
                    *result = PositionResult::new(CellStatus::Mismatch, CellStatus::Mismatch);
                }
            }
        }

        feedback
    }

    /// Resolve every position independently, without multiplicity correction
    #[must_use]
    pub fn resolve(&self) -> Feedback {
        let results = self
            .secret
            .aksharas()
            .iter()
            .zip(self.guess.aksharas())
            .map(|(target, guessed)| {
                PositionResult::new(
                    self.resolve_vyanjanas(target, guessed.vyanjanas()),
                    self.resolve_svara(target, guessed.svara()),
                )
            })
            .collect();

        Feedback::new(results)
    }

    fn resolve_svara(&self, target: &Akshara, svara: &str) -> CellStatus {
        if target.svara() == svara {
            CellStatus::Correct
        } else if self.secret.contains_svara(svara) {
            CellStatus::Present
        } else {
            CellStatus::Absent
        }
    }

    fn resolve_vyanjanas(&self, target: &Akshara, cluster: &[String]) -> CellStatus {
        if target.vyanjanas() == cluster {
            return CellStatus::Correct;
        }

        // Missing outranks Present: one partial match in this position is enough
        let mut status = CellStatus::Absent;
        for vyanjana in cluster {
            if target.has_vyanjana(vyanjana) {
                return CellStatus::Missing;
            }
            if self.secret.contains_vyanjana(vyanjana) {
                status = CellStatus::Present;
            }
        }
        status
    }

    fn degrade(&self, results: &mut [PositionResult]) {
        self.degrade_side(Side::Svara, &self.secret.svara_counts(), results);
        self.degrade_side(Side::Vyanjana, &self.secret.vyanjana_counts(), results);
    }

    /// Downgrade excess `Present` credits on one side, symbol by symbol
    ///
    /// Symbols are visited in order of first appearance in the guess, and tallies are
    /// taken against the results as already degraded by earlier symbols.
    fn degrade_side(
        &self,
        side: Side,
        budget: &FxHashMap<&str, usize>,
        results: &mut [PositionResult],
    ) {
        for symbol in self.guess_symbols(side) {
            let allowed = budget.get(symbol).copied().unwrap_or(0);
            let credited = (0..results.len())
                .filter(|&i| self.is_credited(side, i, symbol, results[i].get(side)))
                .count();

            let mut excess = credited.saturating_sub(allowed);
            if excess == 0 {
                continue;
            }

            debug!(?side, symbol, credited, allowed, "degrading over-credited symbol");

            for (i, akshara) in self.guess.aksharas().iter().enumerate() {
                if excess == 0 {
                    break;
                }
                let holds_symbol = side.symbols(akshara).iter().any(|s| s == symbol);
                if holds_symbol && results[i].get(side) == CellStatus::Present {
                    results[i].set(side, CellStatus::Absent);
                    excess -= 1;
                }
            }
        }
    }

    /// Distinct guess symbols on one side, in order of first appearance
    fn guess_symbols(&self, side: Side) -> Vec<&'a str> {
        let mut symbols: Vec<&str> = Vec::new();
        for akshara in self.guess.aksharas() {
            for symbol in side.symbols(akshara) {
                if !symbols.contains(&symbol.as_str()) {
                    symbols.push(symbol);
                }
            }
        }
        symbols
    }

    /// Check whether the status at `index` gives credit to `symbol`
    fn is_credited(&self, side: Side, index: usize, symbol: &str, status: CellStatus) -> bool {
        let holds_symbol = side
            .symbols(&self.guess.aksharas()[index])
            .iter()
            .any(|s| s == symbol);
        if !holds_symbol {
            return false;
        }

        match status {
            CellStatus::Correct => true,
            CellStatus::Missing => side
                .symbols(&self.secret.aksharas()[index])
                .iter()
                .any(|s| s == symbol),
            CellStatus::Present => match side {
                Side::Svara => self.secret.contains_svara(symbol),
                Side::Vyanjana => self.secret.contains_vyanjana(symbol),
            },
            CellStatus::Absent | CellStatus::Mismatch => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellStatus::{Absent, Correct, Missing, Mismatch, Present};

    fn compare(secret: &str, guess: &str) -> Feedback {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        Comparator::new(&secret, &guess).unwrap().compare()
    }

    fn resolve(secret: &str, guess: &str) -> Feedback {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        Comparator::new(&secret, &guess).unwrap().resolve()
    }

    #[test]
    fn identical_words_are_correct_everywhere() {
        let feedback = compare("मीनाक्षी", "मीनाक्षी");
        assert_eq!(feedback.as_slice(), [PositionResult::CORRECT; 3]);
        assert!(feedback.is_solved());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let secret = Word::new("मीनाक्षी").unwrap();
        let guess = Word::new("राम").unwrap();
        assert_eq!(
            Comparator::new(&secret, &guess).unwrap_err(),
            CompareError::LengthMismatch {
                secret: 3,
                guess: 2
            }
        );
    }

    #[test]
    fn svara_present_elsewhere() {
        // नी at position 1: ई is not the secret's आ there, but occurs at 0 and 2
        let feedback = resolve("मीनाक्षी", "मीनीक्षी");
        assert_eq!(feedback[1].svara, Present);
        assert_eq!(feedback[1].vyanjana, Correct);
    }

    #[test]
    fn svara_absent_when_nowhere_in_secret() {
        let feedback = compare("मीनाक्षी", "मुनाक्षी");
        assert_eq!(feedback[0], PositionResult::new(Correct, Absent));
    }

    #[test]
    fn vyanjana_absent_when_nowhere_in_secret() {
        // र् occurs nowhere in the secret
        let feedback = compare("मीनाक्षी", "रीनाक्षी");
        assert_eq!(feedback[0], PositionResult::new(Absent, Correct));
    }

    #[test]
    fn vyanjana_present_elsewhere() {
        // नी at position 0: न् is at position 1 in the secret
        let feedback = compare("मीनाक्षी", "नीमाक्षी");
        assert_eq!(feedback[0], PositionResult::new(Present, Correct));
        assert_eq!(feedback[1], PositionResult::new(Present, Correct));
    }

    #[test]
    fn vyanjana_missing_when_cluster_partly_matches() {
        // क्षी vs क्ती: क् sits in the right cluster, ष् is replaced
        let feedback = compare("मीनाक्षी", "मीनाक्ती");
        assert_eq!(feedback[2], PositionResult::new(Missing, Correct));
    }

    #[test]
    fn vyanjana_missing_outranks_present() {
        // Cluster [न्, क्]: न् is present elsewhere, क् matches this position
        let feedback = resolve("मीनाक्षी", "मीनान्की");
        assert_eq!(feedback[2].vyanjana, Missing);
    }

    #[test]
    fn vyanjana_missing_for_reordered_cluster() {
        let feedback = compare("मीनाक्षी", "मीनाष्की");
        assert_eq!(feedback[2].vyanjana, Missing);
    }

    #[test]
    fn empty_clusters_are_equal() {
        // अ, यो, ध्या: position 0 has no vyanjanas in either word
        let feedback = compare("अयोध्या", "अयोध्या");
        assert_eq!(feedback[0], PositionResult::CORRECT);

        // आ is present, but its single occurrence is already credited at position 2
        assert_eq!(resolve("अयोध्या", "आयोध्या")[0], PositionResult::new(Correct, Present));
        assert_eq!(compare("अयोध्या", "आयोध्या")[0], PositionResult::new(Correct, Absent));
    }

    #[test]
    fn empty_guess_cluster_against_consonant_is_absent() {
        let feedback = compare("मीनाक्षी", "ईनाक्षी");
        assert_eq!(feedback[0], PositionResult::new(Absent, Correct));
    }

    #[test]
    fn degrade_downgrades_repeated_vyanjana() {
        // क् occurs once in the secret; the guess uses it at 0 and correctly at 2
        let resolved = resolve("मीनाक्षी", "कानाक्षी");
        assert_eq!(resolved[0].vyanjana, Present);

        let feedback = compare("मीनाक्षी", "कानाक्षी");
        assert_eq!(feedback[0].vyanjana, Absent);
        assert_eq!(feedback[2], PositionResult::CORRECT);
    }

    #[test]
    fn degrade_downgrades_repeated_svara_in_ascending_order() {
        // आ occurs once in the secret (position 1)
        // Guess मा, ना, क्षा: आ correct at 1, present at 0 and 2
        let feedback = compare("मीनाक्षी", "मानाक्षा");
        assert_eq!(feedback[1].svara, Correct);
        assert_eq!(feedback[0].svara, Absent);
        assert_eq!(feedback[2].svara, Absent);
    }

    #[test]
    fn degrade_keeps_credits_within_budget() {
        // ई occurs twice in the secret
        let feedback = compare("मीनाक्षी", "नीमीक्षा");
        // Position 0: ई correct. Position 1: ई present (budget 2, credited 2)
        assert_eq!(feedback[0].svara, Correct);
        assert_eq!(feedback[1].svara, Present);
    }

    #[test]
    fn degrade_downgrades_lowest_positions_first() {
        // Secret राघव has one आ; the guess places आ at 1 and 2, neither correct
        let feedback = compare("राघव", "घवारा");
        assert_eq!(feedback[0].svara, Present);
        assert_eq!(feedback[1].svara, Absent);
        assert_eq!(feedback[2].svara, Present);
    }

    #[test]
    fn degrade_budget_counts_doubled_vyanjana() {
        // त्त in उत्तम holds त् twice, so two positions may keep credit for it
        assert_eq!(resolve("उत्तम", "तत्तम").to_codes(), "YY GG GG");
        assert_eq!(compare("उत्तम", "तत्तम").to_codes(), "Y- GG GG");

        // A third त् position exceeds the budget; the lowest Present drops
        assert_eq!(resolve("उत्तम", "तत्तत").to_codes(), "YY GG YG");
        assert_eq!(compare("उत्तम", "तत्तत").to_codes(), "-- GG YG");
    }

    #[test]
    fn degrade_budget_for_single_vyanjana() {
        // Same guess shape against a secret holding त् once
        assert_eq!(compare("उतम", "ततम").to_codes(), "-- GG GG");
    }

    #[test]
    fn degrade_never_touches_missing() {
        // क् credited Missing at 2 and Present at 0; only the Present one drops
        let feedback = compare("मीनाक्षी", "कानाक्ती");
        assert_eq!(feedback[2].vyanjana, Missing);
        assert_eq!(feedback[0].vyanjana, Absent);
    }

    #[test]
    fn degrade_can_be_disabled() {
        let secret = Word::new("मीनाक्षी").unwrap();
        let guess = Word::new("कानाक्षी").unwrap();
        let policy = ComparePolicy {
            degrade: false,
            flag_mismatch: false,
        };
        let feedback = Comparator::new(&secret, &guess)
            .unwrap()
            .with_policy(policy)
            .compare();
        assert_eq!(feedback[0].vyanjana, Present);
    }

    #[test]
    fn mismatch_flagged_when_both_sides_present() {
        let secret = Word::new("राघव").unwrap();
        let guess = Word::new("घराव").unwrap();
        let comparator = Comparator::new(&secret, &guess).unwrap();

        // Positions 0 and 1: vyanjana and svara each occur elsewhere in the secret
        assert_eq!(comparator.compare().to_codes(), "YY YY GG");

        let policy = ComparePolicy {
            degrade: true,
            flag_mismatch: true,
        };
        let feedback = comparator.with_policy(policy).compare();
        assert_eq!(feedback.to_codes(), "RR RR GG");
        assert_eq!(feedback[0], PositionResult::new(Mismatch, Mismatch));
    }

    #[test]
    fn compare_is_deterministic() {
        let secret = Word::new("लक्ष्मण").unwrap();
        let guess = Word::new("कमल").unwrap();
        let comparator = Comparator::new(&secret, &guess).unwrap();
        assert_eq!(comparator.compare(), comparator.compare());
    }

    #[test]
    fn default_policy() {
        let policy = ComparePolicy::default();
        assert!(policy.degrade);
        assert!(!policy.flag_mismatch);
    }
}
