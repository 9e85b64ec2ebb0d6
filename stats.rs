use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::sorting::sort_ascending;
use crate::stats_types::{CharFrequencies, FrequencyRecord};

// Compile regexes once
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());
static LETTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}$").unwrap());
static NORMALIZED_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+(?:['\-][a-z0-9]+)*").unwrap());

/// Count every character of the lower-cased text, except the spaces it is split on.
///
/// Only `' '` delimits tokens here. Tabs and newlines stay inside their token
/// and are counted like any other character.
pub fn count_characters(text: &str) -> CharFrequencies {
    let lowered = text.to_lowercase();
    let mut freqs = CharFrequencies::new();
    for token in lowered.split(' ') {
        for ch in token.chars() {
            *freqs.entry(ch).or_insert(0) += 1;
        }
    }
    trace!("counted {} distinct characters", freqs.len());
    freqs
}

/// True for characters in a Unicode letter category (Lu, Ll, Lt, Lm, Lo).
///
/// Letter numbers and combining marks are `is_alphabetic` but not letters.
pub fn is_letter(ch: char) -> bool {
    let mut buf = [0u8; 4];
    LETTER_REGEX.is_match(ch.encode_utf8(&mut buf))
}

/// Number of whitespace-separated words. Punctuation stays attached to its word.
///
/// The ASCII separators `\x1c`..`\x1f` also split words.
pub fn count_words(text: &str) -> usize {
    let lowered = text.to_lowercase();
    let count = WHITESPACE_REGEX
        .split(&lowered)
        .filter(|w| !w.is_empty())
        .count();
    debug!("whitespace word count: {}", count);
    count
}

/// Number of words made of letters and digits, allowing inner `'` and `-`.
///
/// "self-evident" and "don't" are one word each; a free-standing "--" is none.
pub fn count_normalized_words(text: &str) -> usize {
    let lowered = text.to_lowercase();
    let count = NORMALIZED_WORD_REGEX.find_iter(&lowered).count();
    debug!("normalized word count: {}", count);
    count
}

/// Letter entries of `freqs`, least frequent first, ties in first-seen order.
pub fn sorted_alpha_frequencies(freqs: &CharFrequencies) -> Vec<FrequencyRecord> {
    let letters: Vec<FrequencyRecord> = freqs
        .iter()
        .filter(|&(&ch, _)| is_letter(ch))
        .map(|(&ch, &count)| FrequencyRecord::new(ch, count))
        .collect();
    sort_ascending(letters)
}
