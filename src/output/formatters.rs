//! Formatting utilities for terminal output

use crate::core::{CellStatus, Feedback, PositionResult, Word};
use colored::{Color, Colorize};

/// Terminal color for a status
#[must_use]
pub const fn status_color(status: CellStatus) -> Color {
    match status {
        CellStatus::Correct => Color::Green,
        CellStatus::Present => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        }, // Orange
        CellStatus::Absent => Color::BrightBlack,
        CellStatus::Missing => Color::Blue,
        CellStatus::Mismatch => Color::Red,
    }
}

/// Format one cell: left block for the vyanjana status, right block for the svara status
#[must_use]
pub fn render_cell(akshara: &str, result: PositionResult) -> String {
    format!(
        "{} {} {}",
        "██".color(status_color(result.vyanjana)),
        akshara.bold(),
        "██".color(status_color(result.svara))
    )
}

/// Format a guess as a row of cells
///
/// Positions beyond the shorter of word and feedback are not shown.
#[must_use]
pub fn render_row(word: &Word, feedback: &Feedback) -> String {
    word.aksharas()
        .iter()
        .zip(feedback)
        .map(|(akshara, &result)| render_cell(akshara.text(), result))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Status legend, one line per status
#[must_use]
pub fn legend() -> Vec<(CellStatus, &'static str)> {
    vec![
        (
            CellStatus::Correct,
            "right symbol in the right position",
        ),
        (
            CellStatus::Present,
            "symbol occurs elsewhere in the word",
        ),
        (CellStatus::Absent, "symbol is not in the word"),
        (
            CellStatus::Missing,
            "vyanjana belongs here, but add, remove, replace or rearrange the cluster",
        ),
        (
            CellStatus::Mismatch,
            "svara and vyanjana are both elsewhere, never together",
        ),
    ]
}
