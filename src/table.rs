//! The byte-keyed count table produced by the counter.

use std::collections::hash_map::{self, HashMap};
use std::collections::BTreeMap;

/// Byte value treated as "space" by the report and statistics.
pub const SPACE: u8 = b' ';

/// Occurrence counts keyed by raw byte.
///
/// A "character" here is a single 8-bit code unit. Multi-byte UTF-8 text is
/// tallied per byte, so `é` contributes two entries. Iteration order is the
/// hash map's and is not stable; use [`FrequencyTable::sorted`] when order
/// matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<u8, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `byte`.
    pub fn increment(&mut self, byte: u8) {
        *self.counts.entry(byte).or_insert(0) += 1;
    }

    /// Record every byte of `line`.
    pub fn extend_from_line(&mut self, line: &[u8]) {
        for &b in line {
            self.increment(b);
        }
    }

    /// Count for `byte`, zero if it was never seen.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts.get(&byte).copied().unwrap_or(0)
    }

    /// Number of distinct bytes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of characters read.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, u8, u64> {
        self.counts.iter()
    }

    /// Entries ordered by byte value.
    pub fn sorted(&self) -> Vec<(u8, u64)> {
        let mut entries: Vec<(u8, u64)> = self.counts.iter().map(|(&b, &n)| (b, n)).collect();
        entries.sort_unstable_by_key(|&(b, _)| b);
        entries
    }

    /// Entries other than the space character, ordered by byte value.
    pub fn non_space(&self) -> Vec<(u8, u64)> {
        self.sorted().into_iter().filter(|&(b, _)| b != SPACE).collect()
    }

    /// Keys rendered as strings (each byte mapped to the char with the same
    /// code point) for JSON output.
    pub fn to_string_keyed(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(&b, &n)| (char::from(b).to_string(), n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_defaults_to_zero() {
        let mut t = FrequencyTable::new();
        assert_eq!(t.get(b'a'), 0);
        t.increment(b'a');
        t.increment(b'a');
        assert_eq!(t.get(b'a'), 2);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn non_space_skips_space_and_sorts() {
        let mut t = FrequencyTable::new();
        t.extend_from_line(b"zb a");
        assert_eq!(t.non_space(), vec![(b'a', 1), (b'b', 1), (b'z', 1)]);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn counts_raw_bytes_not_chars() {
        let mut t = FrequencyTable::new();
        t.extend_from_line("é".as_bytes());
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0xC3), 1);
        assert_eq!(t.get(0xA9), 1);
    }
}
