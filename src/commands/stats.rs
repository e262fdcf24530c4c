//! Word list statistics
//!
//! Decomposes every entry of a word list and summarizes akshara counts.

use crate::core::Word;
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Summary of a word list
#[derive(Debug, Default)]
pub struct ListSummary {
    pub total: usize,
    /// Distinct words that decompose cleanly
    pub valid: usize,
    /// Entries that failed to load, with the reason
    pub rejected: Vec<(String, String)>,
    /// Distinct valid words by akshara count
    pub histogram: BTreeMap<usize, usize>,
}

/// Decompose every entry in parallel and summarize the results
#[must_use]
pub fn summarize_entries(entries: &[String], show_progress: bool) -> ListSummary {
    let pb = if show_progress {
        ProgressBar::new(entries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<(&String, Result<Word, String>)> = entries
        .par_iter()
        .map(|entry| {
            let result = Word::new(entry.as_str()).map_err(|e| e.to_string());
            pb.inc(1);
            (entry, result)
        })
        .collect();

    pb.finish_and_clear();

    let mut words = Vec::new();
    let mut rejected = Vec::new();
    for (entry, result) in results {
        match result {
            Ok(word) => words.push(word),
            Err(reason) => rejected.push((entry.clone(), reason)),
        }
    }

    let lexicon = Lexicon::new(words);
    ListSummary {
        total: entries.len(),
        valid: lexicon.len(),
        rejected,
        histogram: lexicon.length_histogram(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn entries(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn summarize_counts_lengths_and_rejections() {
        let list = entries(&["राम", "राघव", "जानकी", "सिंह", "rama"]);
        let summary = summarize_entries(&list, false);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.valid, 3);
        assert_eq!(summary.histogram.get(&2), Some(&1));
        assert_eq!(summary.histogram.get(&3), Some(&2));

        // Rejections keep input order
        let rejected: Vec<&str> = summary.rejected.iter().map(|(e, _)| e.as_str()).collect();
        assert_eq!(rejected, ["सिंह", "rama"]);
    }

    #[test]
    fn summarize_counts_repeated_entries_once() {
        let list = entries(&["राम", "राघव", "राम"]);
        let summary = summarize_entries(&list, false);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.histogram.get(&2), Some(&1));
        assert_eq!(summary.histogram.get(&3), Some(&1));
        assert!(summary.rejected.is_empty());
    }

    #[test]
    fn summarize_empty_list() {
        let summary = summarize_entries(&[], false);
        assert_eq!(summary.total, 0);
        assert!(summary.histogram.is_empty());
    }

    #[test]
    fn embedded_list_is_fully_valid() {
        let list = entries(WORDS);
        let summary = summarize_entries(&list, false);
        assert_eq!(summary.valid, WORDS.len());
        assert!(summary.rejected.is_empty());
    }
}
