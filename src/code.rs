//! Binary code words and code tables.

use std::collections::BTreeMap;

/// A binary code word, one bit (0 or 1) per element.
pub type Code = Vec<u8>;

/// Mapping from symbol to binary code word.
///
/// A valid table satisfies the prefix property: no code word is a prefix of
/// another, so a concatenation of code words decodes unambiguously left to
/// right. Both coders in this crate produce prefix-free tables; callers
/// assembling tables by hand can verify with [`CodeTable::is_prefix_free`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Code>,
}

impl<S: Ord + Copy> CodeTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Assign `code` to `symbol`, replacing any previous assignment.
    pub fn insert(&mut self, symbol: S, code: Code) {
        self.codes.insert(symbol, code);
    }

    /// Code word for `symbol`, if assigned.
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    /// Check the prefix property: no code word is a prefix of another.
    ///
    /// Pairwise scan; alphabets here are small enough that this stays cheap.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }
}

impl<S: Ord + Copy> Default for CodeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_free_detects_violation() {
        let mut table = CodeTable::new();
        table.insert('a', vec![0]);
        table.insert('b', vec![0, 1]);
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_prefix_free_accepts_valid_table() {
        let mut table = CodeTable::new();
        table.insert('a', vec![0]);
        table.insert('b', vec![1, 0]);
        table.insert('c', vec![1, 1]);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_empty_table_is_prefix_free() {
        let table = CodeTable::<char>::new();
        assert!(table.is_prefix_free());
        assert!(table.is_empty());
    }
}
