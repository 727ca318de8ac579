//! # Classic Information-Theoretic Codes
//!
//! *Shannon-Fano, Huffman, and arithmetic coding over an explicit symbol model.*
//!
//! ## Intuition First
//!
//! A message written in a fixed-width alphabet wastes space whenever some symbols
//! occur more often than others. Variable-length codes spend short code words on
//! frequent symbols and long ones on rare symbols; arithmetic coding goes further
//! and represents the *whole* message as a single number inside an interval whose
//! width equals the message's probability.
//!
//! ## The Problem
//!
//! Given the empirical distribution of a symbol stream, we want:
//! - **Prefix codes** that can be decoded unambiguously left to right
//!   (no code word is a prefix of another).
//! - A measure of how close a code gets to the theoretical optimum
//!   (entropy, average length, redundancy).
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon        Entropy as the fundamental limit
//! 1949  Shannon/Fano   Top-down probability splitting: near-optimal prefix codes
//! 1952  Huffman        Bottom-up merging: provably optimal prefix codes
//! 1976  Rissanen       Arithmetic coding: fractional bits per symbol
//! ```
//!
//! Huffman's key insight was to build the code tree from the *least* probable
//! symbols upward, which Shannon-Fano's greedy top-down split cannot always match.
//!
//! ## Mathematical Formulation
//!
//! For a distribution $P = \{p_s\}$ the entropy $H = -\sum_s p_s \log_2 p_s$
//! lower-bounds the average length $L = \sum_s p_s \cdot |code(s)|$ of any prefix
//! code; the redundancy $R = (L - H) / L$ measures the fractional excess.
//! Arithmetic coding narrows $[low, high) \subset [0, 1)$ by each symbol's
//! cumulative probability interval, so the final interval has width
//! $\prod_i p_{s_i}$ and any number inside it identifies the message.
//!
//! ## Complexity Analysis
//!
//! - **Shannon-Fano**: $O(n^2)$ worst case over alphabet size $n$ (split search).
//! - **Huffman**: $O(n \log n)$ heap merges.
//! - **Arithmetic**: $O(n \cdot m)$ decode over message length $m$
//!   (linear interval scan per step).
//!
//! ## Failure Modes
//!
//! 1. **Precision loss**: the arithmetic coder uses plain `f64` intervals. Long
//!    messages shrink the interval below representable precision; decoding then
//!    reports [`Error::IntervalMatch`](error::Error::IntervalMatch) instead of
//!    returning a wrong-but-plausible message.
//! 2. **Model mismatch**: decoding against a different model than the one used
//!    to encode is undefined. The fixed symbol order lives inside
//!    [`IntervalTable`], so the caller only has to reuse one value.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **Shannon-Fano** and **Huffman** code-table construction from a shared
//!   [`SymbolModel`].
//! - **Arithmetic coding** with an explicit terminator symbol and a full
//!   per-step interval trace for both encode and decode.
//! - **Metrics** (entropy, average length, redundancy) for any code table.
//!
//! All tree construction and traversal is iterative (explicit work stacks), so
//! large alphabets cannot exhaust the call stack.
//!
//! ## References
//!
//! - Fano, R. (1949). "The Transmission of Information."
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Rissanen, J. (1976). "Generalized Kraft Inequality and Arithmetic Coding."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod code;
pub mod error;
pub mod huffman;
pub mod metrics;
pub mod model;
pub mod shannon_fano;

pub use arithmetic::{IntervalTable, TraceStep, DEFAULT_MAX_STEPS};
pub use code::{Code, CodeTable};
pub use error::{Error, Result};
pub use metrics::CodeMetrics;
pub use model::{SymbolModel, MAX_ALPHABET};
