use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::sorting::sort_descending;
use crate::stats::{count_characters, count_normalized_words, count_words, sorted_alpha_frequencies};
use crate::stats_types::FrequencyRecord;

const HEADER: &str = "============ BOOKBOT ============";
const WORD_SECTION: &str = "----------- Word Count ----------";
const CHAR_SECTION: &str = "--------- Character Count -------";
const FOOTER: &str = "============= END ===============";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which tokenizer produces the word count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordMode {
    /// Split on whitespace, punctuation stays attached
    #[default]
    Whitespace,
    /// Letters and digits, joined by inner apostrophes or hyphens
    Normalized,
}

/// Statistics for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookReport {
    pub source: String,
    pub word_mode: WordMode,
    pub word_count: usize,
    /// Letters, least frequent first
    pub characters: Vec<FrequencyRecord>,
}

impl BookReport {
    pub fn analyze(source: impl Into<String>, text: &str, word_mode: WordMode) -> Self {
        let word_count = match word_mode {
            WordMode::Whitespace => count_words(text),
            WordMode::Normalized => count_normalized_words(text),
        };
        let characters = sorted_alpha_frequencies(&count_characters(text));
        BookReport {
            source: source.into(),
            word_mode,
            word_count,
            characters,
        }
    }

    /// Characters re-sorted most frequent first
    pub fn by_frequency(&self) -> Vec<FrequencyRecord> {
        sort_descending(self.characters.clone())
    }

    /// Keep only the `n` most frequent characters, still least frequent first.
    pub fn truncate_to_top(&mut self, n: usize) {
        let len = self.characters.len();
        if n < len {
            self.characters.drain(..len - n);
        }
    }
}

/// The plain-text report, most frequent character first.
pub fn render_text(report: &BookReport) -> String {
    let chars = report
        .by_frequency()
        .iter()
        .map(|r| format!("{}: {}", r.ch, r.count))
        .join("\n");
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!("Analyzing book found at {}...\n", report.source));
    out.push_str(WORD_SECTION);
    out.push('\n');
    out.push_str(&format!("Found {} total words\n", report.word_count));
    out.push_str(CHAR_SECTION);
    out.push('\n');
    if !chars.is_empty() {
        out.push_str(&chars);
        out.push('\n');
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

pub fn render_json(report: &BookReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::is_letter;

    #[test]
    fn analyze_collects_words_and_letters() {
        let report = BookReport::analyze("books/tiny.txt", "Hello World, hello!", WordMode::Whitespace);
        assert_eq!(report.word_count, 3);
        assert_eq!(report.characters.last(), Some(&FrequencyRecord::new('l', 5)));
        assert!(report.characters.iter().all(|r| is_letter(r.ch)));
    }

    #[test]
    fn word_mode_changes_only_the_word_count() {
        let text = "self-evident -- truths";
        let loose = BookReport::analyze("a", text, WordMode::Whitespace);
        let strict = BookReport::analyze("a", text, WordMode::Normalized);
        assert_eq!(loose.word_count, 3);
        assert_eq!(strict.word_count, 2);
        assert_eq!(loose.characters, strict.characters);
    }

    #[test]
    fn text_report_lists_most_frequent_first() {
        let report = BookReport::analyze("books/tiny.txt", "aaa bb c", WordMode::Whitespace);
        let expected = "\
============ BOOKBOT ============
Analyzing book found at books/tiny.txt...
----------- Word Count ----------
Found 3 total words
--------- Character Count -------
a: 3
b: 2
c: 1
============= END ===============
";
        assert_eq!(render_text(&report), expected);
    }

    #[test]
    fn text_report_ties_keep_first_seen_order() {
        let report = BookReport::analyze("ties.txt", "yxz yx", WordMode::Whitespace);
        let order: Vec<char> = report.by_frequency().iter().map(|r| r.ch).collect();
        assert_eq!(order, vec!['y', 'x', 'z']);
        assert!(render_text(&report).contains("y: 2\nx: 2\nz: 1\n"));
    }

    #[test]
    fn text_report_for_empty_document() {
        let report = BookReport::analyze("empty.txt", "", WordMode::Whitespace);
        let rendered = render_text(&report);
        assert!(rendered.contains("Found 0 total words\n"));
        assert!(rendered.ends_with("-------\n============= END ===============\n"));
    }

    #[test]
    fn truncate_keeps_most_frequent() {
        let mut report = BookReport::analyze("x", "aaaa bbb cc d", WordMode::Whitespace);
        report.truncate_to_top(2);
        assert_eq!(
            report.characters,
            vec![FrequencyRecord::new('b', 3), FrequencyRecord::new('a', 4)]
        );
        report.truncate_to_top(10);
        assert_eq!(report.characters.len(), 2);
    }

    #[test]
    fn json_report_uses_char_field() {
        let report = BookReport::analyze("x.txt", "ab a", WordMode::Normalized);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["source"], "x.txt");
        assert_eq!(value["word_mode"], "normalized");
        assert_eq!(value["word_count"], 2);
        assert_eq!(value["characters"][0]["char"], "b");
        assert_eq!(value["characters"][1]["count"], 2);
    }
}
