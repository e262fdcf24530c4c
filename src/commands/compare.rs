//! Compare command
//!
//! Compares one guess against one secret and keeps both passes of the result.

use crate::core::{ComparePolicy, Comparator, Feedback, Word};
use crate::error::Result;

/// Result of comparing a guess with a secret
pub struct ComparisonReport {
    pub secret: Word,
    pub guess: Word,
    /// Per-position statuses before multiplicity correction
    pub resolved: Feedback,
    pub feedback: Feedback,
}

/// Compare `guess` against `secret` under `policy`
///
/// # Errors
///
/// Returns an error if:
/// - Either word cannot be decomposed or contains an anusvara
/// - The words differ in akshara count
pub fn compare_words(secret: &str, guess: &str, policy: ComparePolicy) -> Result<ComparisonReport> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    let comparator = Comparator::new(&secret, &guess)?.with_policy(policy);
    let resolved = comparator.resolve();
    let feedback = comparator.compare();

    Ok(ComparisonReport {
        secret,
        guess,
        resolved,
        feedback,
    })
}
