use std::cmp::Reverse;

use crate::{FrequencyTable, Token};

/// How many entries the report keeps.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: Token,
    pub count: u64,
}

/// Entries ordered by count descending, ties broken by token ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Consumes the table and keeps its `n` most frequent tokens.
///
/// Returns every entry when the table holds fewer than `n` distinct tokens.
pub fn top_n(table: FrequencyTable, n: usize) -> RankedList {
    let mut entries: Vec<RankedEntry> = table
        .into_entries()
        .map(|(token, count)| RankedEntry { token, count })
        .collect();
    // Keys are unique, so an unstable sort on (count, token) is still deterministic.
    entries.sort_unstable_by(|a, b| {
        Reverse(a.count)
            .cmp(&Reverse(b.count))
            .then_with(|| a.token.cmp(&b.token))
    });
    entries.truncate(n);
    RankedList { entries }
}
