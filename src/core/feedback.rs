//! Per-position comparison feedback
//!
//! Each position of a guess gets two statuses, one for its vyanjana cluster and one
//! for its svara. The compact code form writes each position as two characters,
//! vyanjana first, with positions separated by spaces:
//! - `G` = Correct (right symbol, right position)
//! - `Y` = Present (symbol occurs elsewhere in the secret)
//! - `-` = Absent (symbol not in the secret, or already fully credited)
//! - `B` = Missing (a vyanjana of this position's cluster is right, the cluster is not)
//! - `R` = Mismatch (svara and vyanjana are both elsewhere, never together)

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Outcome for one side (vyanjana or svara) of one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Correct,
    Present,
    Absent,
    Missing,
    Mismatch,
}

impl CellStatus {
    /// Get the single-character code for this status
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Missing => 'B',
            Self::Mismatch => 'R',
        }
    }

    /// Parse a single-character code
    ///
    /// Accepts upper or lower case letters, and `_` as well as `-` for absent.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'G' | 'g' => Some(Self::Correct),
            'Y' | 'y' => Some(Self::Present),
            '-' | '_' => Some(Self::Absent),
            'B' | 'b' => Some(Self::Missing),
            'R' | 'r' => Some(Self::Mismatch),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Missing => "missing",
            Self::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which half of a position a status belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Vyanjana,
    Svara,
}

/// Vyanjana and svara statuses for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionResult {
    pub vyanjana: CellStatus,
    pub svara: CellStatus,
}

impl PositionResult {
    /// Both sides correct
    pub const CORRECT: Self = Self::new(CellStatus::Correct, CellStatus::Correct);

    #[inline]
    #[must_use]
    pub const fn new(vyanjana: CellStatus, svara: CellStatus) -> Self {
        Self { vyanjana, svara }
    }

    /// Get the status of one side
    #[inline]
    #[must_use]
    pub const fn get(self, side: Side) -> CellStatus {
        match side {
            Side::Vyanjana => self.vyanjana,
            Side::Svara => self.svara,
        }
    }

    #[inline]
    pub fn set(&mut self, side: Side, status: CellStatus) {
        match side {
            Side::Vyanjana => self.vyanjana = status,
            Side::Svara => self.svara = status,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Self::CORRECT
    }
}

impl fmt::Display for PositionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vyanjana.code(), self.svara.code())
    }
}

/// Ordered feedback for a whole guess, one `PositionResult` per akshara
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Feedback(Vec<PositionResult>);

impl Feedback {
    #[must_use]
    pub fn new(results: Vec<PositionResult>) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[PositionResult] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionResult> {
        self.0.iter()
    }

    /// Check if every position is correct on both sides
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|r| r.is_correct())
    }

    /// Count positions with a status on one side
    #[must_use]
    pub fn count(&self, side: Side, status: CellStatus) -> usize {
        self.0.iter().filter(|r| r.get(side) == status).count()
    }

    /// Convert to the compact code form, e.g. `"GG Y- BG"`
    ///
    /// # Examples
    /// ```
    /// use akshara_wordle::core::Feedback;
    ///
    /// let feedback: Feedback = "GG Y- BG".parse().unwrap();
    /// assert_eq!(feedback.to_codes(), "GG Y- BG");
    /// ```
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [PositionResult] {
        &mut self.0
    }
}

impl Index<usize> for Feedback {
    type Output = PositionResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a PositionResult;
    type IntoIter = std::slice::Iter<'a, PositionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Feedback> for Vec<PositionResult> {
    fn from(feedback: Feedback) -> Self {
        feedback.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_codes())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse the compact code form; whitespace between positions is optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if codes.is_empty() || codes.len() % 2 != 0 {
            return Err(format!("Invalid feedback string: {s}"));
        }

        codes
            .chunks(2)
            .map(|pair| {
                match (
                    CellStatus::from_code(pair[0]),
                    CellStatus::from_code(pair[1]),
                ) {
                    (Some(vyanjana), Some(svara)) => Ok(PositionResult::new(vyanjana, svara)),
                    _ => Err(format!("Invalid feedback string: {s}")),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
