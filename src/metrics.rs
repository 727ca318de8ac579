//! Code-efficiency metrics: entropy, average length, redundancy.

use crate::code::CodeTable;
use crate::model::SymbolModel;

/// Efficiency figures for a code table against a probability model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeMetrics {
    /// Shannon entropy `H = -Σ p·log2(p)` in bits per symbol: the theoretical
    /// minimum average code length for the distribution.
    pub entropy: f64,
    /// Average code length `L = Σ p·len(code)` in bits per symbol.
    pub average_length: f64,
    /// Redundancy `R = (L - H) / L`: the fractional excess of the code over
    /// the entropy bound. Zero when `L` is zero.
    pub redundancy: f64,
}

/// Shannon entropy of `model` in bits per symbol.
pub fn entropy<S: Ord + Copy>(model: &SymbolModel<S>) -> f64 {
    model
        .probabilities()
        .iter()
        .map(|&(_, p)| -p * p.log2())
        .sum()
}

/// Compute all metrics for `codes` against `model`.
///
/// Symbols missing from the table contribute length 0; that only happens for
/// mismatched inputs and is a defensive default, not a success path.
pub fn evaluate<S: Ord + Copy>(model: &SymbolModel<S>, codes: &CodeTable<S>) -> CodeMetrics {
    let mut entropy = 0.0;
    let mut average_length = 0.0;
    for (s, p) in model.probabilities() {
        entropy -= p * p.log2();
        average_length += p * codes.get(&s).map_or(0, Vec::len) as f64;
    }
    let redundancy = if average_length > 0.0 {
        (average_length - entropy) / average_length
    } else {
        0.0
    };

    CodeMetrics {
        entropy,
        average_length,
        redundancy,
    }
}
