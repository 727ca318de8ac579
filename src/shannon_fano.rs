//! Shannon-Fano coding.
//!
//! Builds a prefix code top-down: symbols are sorted by descending probability
//! and repeatedly split into two groups of near-equal probability mass, the
//! left group receiving a 0 bit and the right a 1 bit.
//!
//! # Historical Context
//!
//! Proposed independently by Claude Shannon (1948) and Robert Fano (1949),
//! this was the first systematic prefix-code construction. It is near-optimal
//! but not optimal: the greedy top-down split can be beaten by Huffman's
//! bottom-up merge for some distributions.

use crate::code::CodeTable;
use crate::model::SymbolModel;

/// Build a Shannon-Fano code table for `model`.
///
/// Symbols are ranked by descending probability, ties broken by ascending
/// symbol order so the result is reproducible. Each group is split at the
/// index minimizing the absolute difference between the two halves' summed
/// probabilities (smallest index on ties). A group of one symbol keeps its
/// accumulated prefix as its code; a single-symbol alphabet gets the code `0`
/// rather than an empty word, which would not be decodable.
pub fn encode<S: Ord + Copy>(model: &SymbolModel<S>) -> CodeTable<S> {
    let mut ranked = model.probabilities();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    // Prefix sums make each split probe O(1).
    let mut prefix = vec![0.0; ranked.len() + 1];
    for (i, &(_, p)) in ranked.iter().enumerate() {
        prefix[i + 1] = prefix[i] + p;
    }

    let mut table = CodeTable::new();
    // Explicit work stack instead of recursion: (start, end, accumulated bits).
    let mut work = vec![(0usize, ranked.len(), Vec::new())];
    while let Some((start, end, bits)) = work.pop() {
        if end - start == 1 {
            let code = if bits.is_empty() { vec![0] } else { bits };
            table.insert(ranked[start].0, code);
            continue;
        }

        let total = prefix[end] - prefix[start];
        let mut split = start + 1;
        let mut best_diff = f64::INFINITY;
        for i in start + 1..end {
            let left = prefix[i] - prefix[start];
            let diff = (left - (total - left)).abs();
            if diff < best_diff {
                best_diff = diff;
                split = i;
            }
        }

        let mut left_bits = bits.clone();
        left_bits.push(0);
        let mut right_bits = bits;
        right_bits.push(1);
        work.push((start, split, left_bits));
        work.push((split, end, right_bits));
    }

    table
}
