//! Error types for code construction and arithmetic coding.

use thiserror::Error;

/// Error variants for modeling, coding, and decoding operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input sequence contained no symbols, so no model can be built.
    #[error("input sequence is empty")]
    EmptyInput,

    /// The alphabet exceeds the supported maximum (see [`crate::MAX_ALPHABET`]).
    #[error("alphabet has {len} symbols, maximum supported is {max}")]
    AlphabetTooLarge {
        /// Number of distinct symbols observed.
        len: usize,
        /// Maximum number of distinct symbols supported.
        max: usize,
    },

    /// A message symbol has no entry in the interval table.
    #[error("symbol at position {position} is not present in the interval table")]
    UnknownSymbol {
        /// Index of the offending symbol within the message.
        position: usize,
    },

    /// The code value fell outside every symbol interval during decoding.
    ///
    /// Indicates floating-point precision loss (message too long) or a model
    /// that differs from the one used to encode.
    #[error("code value {0} does not fall inside any symbol interval")]
    IntervalMatch(f64),

    /// The terminator symbol was never produced within the decode step bound.
    #[error("terminator not reached within {max_steps} decode steps")]
    DecodeLengthExceeded {
        /// The step bound that was exhausted.
        max_steps: usize,
    },
}

/// A specialized Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;
