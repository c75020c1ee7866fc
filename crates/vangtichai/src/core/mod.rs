//! Core change-making module
//!
//! The calculator is pure and synchronous: it reads only its input and
//! allocates only its output, so it can be called from any context without
//! synchronization. The only fallible operation is building a denomination
//! set; once a set exists, decomposition is total over unsigned amounts.

pub mod amount;
pub mod change;
pub mod denomination;

pub use amount::AmountBuffer;
pub use change::{Breakdown, BreakdownEntry, ChangeCalculator};
pub use denomination::DenominationSet;

use thiserror::Error;

/// Result type for change-making operations
pub type ChangeResult<T> = Result<T, ChangeError>;

/// Errors that can occur while constructing a denomination set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// The denomination sequence was empty
    #[error("denomination set is empty")]
    EmptyDenominations,

    /// A denomination of zero was supplied
    #[error("denomination at index {index} is zero")]
    ZeroDenomination {
        /// Position of the offending value
        index: usize,
    },

    /// The sequence was not strictly descending
    #[error("denominations must be strictly descending: {previous} precedes {current}")]
    NotDescending {
        /// Value before the violation
        previous: u64,
        /// Value at the violation
        current: u64,
    },

    /// The sequence did not end in 1
    #[error("denomination set must end in 1, found {last}")]
    MissingUnit {
        /// The final value of the sequence
        last: u64,
    },
}
