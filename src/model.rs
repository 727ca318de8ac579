//! Symbol frequency and probability modeling.
//!
//! Every coder in this crate starts from a [`SymbolModel`]: the occurrence
//! counts of each distinct symbol in one input sequence, and the probabilities
//! derived from them. The model is immutable once built and is a pure function
//! of the input — nothing is cached between runs.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Maximum number of distinct symbols a model may contain.
///
/// Bounds per-call work for the quadratic split search in Shannon-Fano and the
/// per-step interval scan in arithmetic decoding. Larger alphabets are rejected
/// with [`Error::AlphabetTooLarge`].
pub const MAX_ALPHABET: usize = 1 << 16;

/// Frequency and probability model over one input sequence.
///
/// Symbols are opaque values compared only through their `Ord` implementation,
/// which provides the deterministic ordering used for tie-breaks and for the
/// fixed interval order in arithmetic coding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolModel<S> {
    counts: BTreeMap<S, usize>,
    total: usize,
}

impl<S: Ord + Copy> SymbolModel<S> {
    /// Build a model by counting symbol occurrences in `symbols`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the sequence yields no symbols, and
    /// [`Error::AlphabetTooLarge`] if it contains more than [`MAX_ALPHABET`]
    /// distinct symbols.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0usize;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Err(Error::EmptyInput);
        }
        if counts.len() > MAX_ALPHABET {
            return Err(Error::AlphabetTooLarge {
                len: counts.len(),
                max: MAX_ALPHABET,
            });
        }

        Ok(Self { counts, total })
    }

    /// Occurrence count of `symbol`, or 0 if it never appeared.
    pub fn count(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Probability of `symbol` (count divided by sequence length).
    pub fn probability(&self, symbol: &S) -> f64 {
        self.count(symbol) as f64 / self.total as f64
    }

    /// All `(symbol, probability)` pairs in ascending symbol order.
    ///
    /// This order is the fixed deterministic order shared by every coder.
    pub fn probabilities(&self) -> Vec<(S, f64)> {
        self.counts
            .iter()
            .map(|(&s, &c)| (s, c as f64 / self.total as f64))
            .collect()
    }

    /// Number of distinct symbols.
    pub fn alphabet_len(&self) -> usize {
        self.counts.len()
    }

    /// Total number of symbols in the modeled sequence.
    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_rejected() {
        let result = SymbolModel::<char>::from_symbols(std::iter::empty());
        assert_eq!(result, Err(Error::EmptyInput));
    }

    #[test]
    fn test_oversized_alphabet_rejected() {
        let result = SymbolModel::from_symbols(0u32..=MAX_ALPHABET as u32);
        assert_eq!(
            result,
            Err(Error::AlphabetTooLarge {
                len: MAX_ALPHABET + 1,
                max: MAX_ALPHABET,
            })
        );
    }

    #[test]
    fn test_counts_and_probabilities() {
        let model = SymbolModel::from_symbols("AAB".chars()).unwrap();
        assert_eq!(model.total(), 3);
        assert_eq!(model.alphabet_len(), 2);
        assert_eq!(model.count(&'A'), 2);
        assert_eq!(model.count(&'B'), 1);
        assert_eq!(model.count(&'C'), 0);
        assert!((model.probability(&'A') - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.probability(&'B') - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_in_symbol_order() {
        let model = SymbolModel::from_symbols("cabba".chars()).unwrap();
        let symbols: Vec<char> = model.probabilities().iter().map(|&(s, _)| s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(input in prop::collection::vec(any::<u8>(), 1..200)) {
            let model = SymbolModel::from_symbols(input.iter().copied()).unwrap();
            let sum: f64 = model.probabilities().iter().map(|&(_, p)| p).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_counts_sum_to_length(input in prop::collection::vec(any::<u8>(), 1..200)) {
            let model = SymbolModel::from_symbols(input.iter().copied()).unwrap();
            let sum: usize = model
                .probabilities()
                .iter()
                .map(|(s, _)| model.count(s))
                .sum();
            prop_assert_eq!(sum, input.len());
        }
    }
}
