//! Display functions for command results

use super::formatters::{legend, render_row, status_color};
use crate::commands::{ComparisonReport, DecompositionReport, ListSummary};
use crate::game::Game;
use colored::Colorize;

/// Print the result of comparing a guess with a secret
pub fn print_comparison(report: &ComparisonReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        report.secret.text().bright_yellow().bold(),
        report.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", render_row(&report.guess, &report.feedback));
    println!("  {}", report.feedback.to_codes().bright_black());

    if verbose && report.resolved != report.feedback {
        println!(
            "\n  Before degrade: {}",
            report.resolved.to_codes().bright_black()
        );
    }
    println!();
}

/// Print the akshara breakdown of a word
pub fn print_decomposition(report: &DecompositionReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DECOMPOSITION:".bright_cyan().bold(),
        report.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, row) in report.rows.iter().enumerate() {
        let vyanjanas = if row.vyanjanas.is_empty() {
            "-".to_string()
        } else {
            row.vyanjanas.join(" + ")
        };
        println!(
            "\n  {}. {}  =  {}",
            (i + 1).to_string().bright_black(),
            row.akshara.bright_white().bold(),
            row.vinyaasa.join(" + ")
        );
        println!("     Svara:     {}", row.svara.green());
        println!("     Vyanjanas: {}", vyanjanas.yellow());
    }

    if let Some(symbol) = report.unsupported {
        println!(
            "\n{}",
            format!("⚠ Contains '{symbol}', so it cannot be used in a game").red()
        );
    }
    println!();
}

/// Print a word list summary
pub fn print_summary(summary: &ListSummary, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Entries:   {}", summary.total);
    println!("   Valid:     {}", summary.valid.to_string().green());
    println!("   Rejected:  {}", summary.rejected.len().to_string().red());

    println!("\n📈 {}", "Aksharas per word:".bright_cyan().bold());
    for (length, &count) in &summary.histogram {
        let pct = (count as f64 / summary.valid.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if verbose && !summary.rejected.is_empty() {
        println!("\n   {}", "Rejected entries:".red().bold());
        for (entry, reason) in &summary.rejected {
            println!("     • {entry}: {reason}");
        }
    }
    println!();
}

/// Print every turn played so far
pub fn print_board(game: &Game) {
    for (i, turn) in game.turns().iter().enumerate() {
        println!(
            "  {:>2}. {}   {}",
            (i + 1).to_string().bright_black(),
            render_row(turn.guess(), turn.feedback()),
            turn.feedback().to_codes().bright_black()
        );
    }
}

/// Print the color legend
pub fn print_legend() {
    println!("Left block = vyanjana, right block = svara:");
    for (status, description) in legend() {
        println!(
            "  {} {} {:9} {}",
            "██".color(status_color(status)),
            status.code(),
            status.label(),
            description
        );
    }
    println!();
}
