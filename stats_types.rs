use indexmap::IndexMap;
use serde::Serialize;

/// Character -> occurrence count, keys already case-folded, in first-seen order.
pub type CharFrequencies = IndexMap<char, usize>;

/// One entry of a character frequency listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyRecord {
    #[serde(rename = "char")]
    pub ch: char,
    pub count: usize,
}

impl FrequencyRecord {
    pub fn new(ch: char, count: usize) -> Self {
        FrequencyRecord { ch, count }
    }
}

/// Anything that can be ordered by an occurrence count
pub trait Counted {
    fn count(&self) -> usize;
}

impl Counted for FrequencyRecord {
    fn count(&self) -> usize {
        self.count
    }
}

impl<K> Counted for (K, usize) {
    fn count(&self) -> usize {
        self.1
    }
}
