//! Arithmetic coding over f64 intervals.
//!
//! Encoding narrows the half-open range `[0, 1)` once per symbol, each time to
//! the sub-interval assigned to that symbol by the cumulative probability
//! table; the final lower bound represents the entire message. Decoding runs
//! the same refinement in reverse, at each step picking the symbol whose
//! sub-interval contains the code value, and stops when it produces the
//! caller's terminator symbol.
//!
//! Both directions must use the *same* [`IntervalTable`]; the fixed symbol
//! order the table was built with is part of the code's meaning, so the order
//! is chosen once (ascending symbol order) and stored inside the table rather
//! than passed separately.
//!
//! Precision is bounded by `f64`: every symbol multiplies the interval width
//! by its probability, and once the width falls near machine epsilon the code
//! value no longer distinguishes symbols. That limitation is accepted here
//! (no big-number arithmetic); when it is detectable, decoding fails with
//! [`Error::IntervalMatch`] instead of producing a plausible wrong answer.

use crate::error::{Error, Result};
use crate::model::SymbolModel;

/// Default decode step bound, generous for the short messages f64 precision
/// supports.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// One symbol's half-open slice `[low, high)` of the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalEntry<S> {
    /// The symbol owning this interval.
    pub symbol: S,
    /// Inclusive lower cumulative bound.
    pub low: f64,
    /// Exclusive upper cumulative bound.
    pub high: f64,
}

/// Cumulative probability intervals partitioning `[0, 1)`.
///
/// Intervals are assigned consecutively in ascending symbol order, so the same
/// model always produces the same table and encode/decode cannot disagree on
/// the order.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable<S> {
    entries: Vec<IntervalEntry<S>>,
}

impl<S: Ord + Copy> IntervalTable<S> {
    /// Build the cumulative interval table for `model`.
    pub fn new(model: &SymbolModel<S>) -> Self {
        let mut entries = Vec::with_capacity(model.alphabet_len());
        let mut cum = 0.0;
        for (symbol, p) in model.probabilities() {
            entries.push(IntervalEntry {
                symbol,
                low: cum,
                high: cum + p,
            });
            cum += p;
        }
        Self { entries }
    }

    /// The `[low, high)` interval assigned to `symbol`, if present.
    pub fn interval(&self, symbol: &S) -> Option<(f64, f64)> {
        self.entries
            .binary_search_by(|e| e.symbol.cmp(symbol))
            .ok()
            .map(|i| (self.entries[i].low, self.entries[i].high))
    }

    /// All entries in the table's fixed order.
    pub fn entries(&self) -> &[IntervalEntry<S>] {
        &self.entries
    }
}

/// One step of an encode or decode run: the symbols consumed (or produced) so
/// far and the interval they narrowed the range to. Step 0 records the
/// initial `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep<S> {
    /// Step index, starting at 0 for the initial state.
    pub step: usize,
    /// Prefix of the message handled after this step.
    pub symbols: Vec<S>,
    /// Inclusive lower bound of the current range.
    pub low: f64,
    /// Exclusive upper bound of the current range.
    pub high: f64,
}

impl<S> TraceStep<S> {
    fn initial() -> Self {
        Self {
            step: 0,
            symbols: Vec::new(),
            low: 0.0,
            high: 1.0,
        }
    }
}

/// Encode `message` (terminator already appended by the caller) into a single
/// value in `[0, 1)`.
///
/// Returns the final lower bound together with the full step trace.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if a message symbol has no interval in
/// `table` — the message and the table were built from different alphabets.
pub fn encode<S: Ord + Copy>(
    message: &[S],
    table: &IntervalTable<S>,
) -> Result<(f64, Vec<TraceStep<S>>)> {
    let mut low = 0.0;
    let mut high = 1.0;
    let mut consumed = Vec::with_capacity(message.len());
    let mut trace = Vec::with_capacity(message.len() + 1);
    trace.push(TraceStep::initial());

    for (i, &symbol) in message.iter().enumerate() {
        let (s_low, s_high) = table
            .interval(&symbol)
            .ok_or(Error::UnknownSymbol { position: i })?;
        let span = high - low;
        high = low + span * s_high;
        low += span * s_low;

        consumed.push(symbol);
        trace.push(TraceStep {
            step: i + 1,
            symbols: consumed.clone(),
            low,
            high,
        });
    }

    Ok((low, trace))
}

/// Decode `code` back into the symbol sequence it was encoded from, stopping
/// at (and stripping) `terminator`.
///
/// Each step scans the table's entries in their fixed order and narrows to the
/// first absolute sub-interval containing `code` (lower bound inclusive, upper
/// exclusive). Returns the decoded sequence without the terminator, plus the
/// step trace (which does include the terminator step).
///
/// # Errors
///
/// - [`Error::IntervalMatch`] if `code` falls in no sub-interval: precision
///   was exhausted or `table` is not the one used to encode.
/// - [`Error::DecodeLengthExceeded`] if `max_steps` steps pass without the
///   terminator appearing.
pub fn decode<S: Ord + Copy>(
    code: f64,
    table: &IntervalTable<S>,
    terminator: S,
    max_steps: usize,
) -> Result<(Vec<S>, Vec<TraceStep<S>>)> {
    let mut low = 0.0;
    let mut high = 1.0;
    let mut decoded = Vec::new();
    let mut trace = vec![TraceStep::initial()];

    for step in 1..=max_steps {
        let span = high - low;
        let matched = table.entries().iter().find_map(|e| {
            let abs_low = low + span * e.low;
            let abs_high = low + span * e.high;
            (abs_low <= code && code < abs_high).then_some((e.symbol, abs_low, abs_high))
        });

        let (symbol, abs_low, abs_high) = matched.ok_or(Error::IntervalMatch(code))?;
        low = abs_low;
        high = abs_high;
        decoded.push(symbol);
        trace.push(TraceStep {
            step,
            symbols: decoded.clone(),
            low,
            high,
        });

        if symbol == terminator {
            decoded.pop();
            return Ok((decoded, trace));
        }
    }

    Err(Error::DecodeLengthExceeded { max_steps })
}
