use std::collections::HashMap;

use crate::Token;

/// Occurrence count per distinct token. Every stored count is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    fn record(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (Token, u64)> {
        self.counts.into_iter()
    }
}

/// Builds a table in a single left-to-right pass over `tokens`.
pub fn count(tokens: Vec<Token>) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.record(token);
    }
    table
}
