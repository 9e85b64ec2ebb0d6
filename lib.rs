//! Word counts and letter frequencies for plain-text books.

pub mod document;
pub mod report;
pub mod sorting;
pub mod stats;
pub mod stats_types;

pub use document::{decode_text, load_document, Document};
pub use report::{render_json, render_text, BookReport, OutputFormat, WordMode};
pub use sorting::{sort_ascending, sort_descending};
pub use stats::{count_characters, count_normalized_words, count_words, is_letter, sorted_alpha_frequencies};
pub use stats_types::{CharFrequencies, Counted, FrequencyRecord};
