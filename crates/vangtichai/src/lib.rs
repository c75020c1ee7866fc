//! Vangtichai - Taka Change Breakdown
//!
//! Converts an entered amount of taka into the banknote and coin counts
//! needed to represent it, using greedy largest-denomination-first
//! change-making over a descending denomination set that ends in 1.
//!
//! The calculator itself is pure and total: every unsigned amount decomposes
//! exactly, because the trailing 1 absorbs whatever the larger denominations
//! leave behind. Everything around it - the digit buffer, the keypad, the
//! responsive terminal layout - is presentation glue that feeds the one
//! operation an amount and renders the resulting counts.
//!
//! # Example
//!
//! ```rust
//! use vangtichai::prelude::*;
//!
//! let calculator = ChangeCalculator::new();
//! let breakdown = calculator.breakdown(753);
//!
//! // 753 = 500 + 100 + 100 + 50 + 2 + 1
//! assert_eq!(breakdown.count_of(500), Some(1));
//! assert_eq!(breakdown.count_of(100), Some(2));
//! assert_eq!(breakdown.count_of(50), Some(1));
//! assert_eq!(breakdown.total(), 753);
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::amount::AmountBuffer;
    pub use crate::core::change::{Breakdown, BreakdownEntry, ChangeCalculator};
    pub use crate::core::denomination::{DenominationSet, TAKA_DENOMINATIONS};
    pub use crate::core::{ChangeError, ChangeResult};

    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction, VangtiChaiApp};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        // Verify all prelude exports work together
        let calculator = ChangeCalculator::new();
        let breakdown = calculator.breakdown(42);
        assert_eq!(breakdown.total(), 42);
    }

    #[test]
    fn test_buffer_to_breakdown() {
        let mut buffer = AmountBuffer::new();
        buffer.press_digit(7);
        buffer.press_digit(5);
        buffer.press_digit(3);

        let calculator = ChangeCalculator::new();
        let breakdown = calculator.breakdown(buffer.value());
        assert_eq!(breakdown.count_of(500), Some(1));
        assert_eq!(breakdown.count_of(2), Some(1));
        assert_eq!(breakdown.count_of(1), Some(1));
    }

    #[test]
    fn test_custom_denomination_set() {
        let set = DenominationSet::new(vec![25, 10, 5, 1]).unwrap();
        let calculator = ChangeCalculator::with_denominations(set);
        let breakdown = calculator.breakdown(41);
        assert_eq!(breakdown.count_of(25), Some(1));
        assert_eq!(breakdown.count_of(10), Some(1));
        assert_eq!(breakdown.count_of(5), Some(1));
        assert_eq!(breakdown.count_of(1), Some(1));
    }

    #[test]
    fn test_taka_constant_is_validated() {
        assert!(DenominationSet::new(TAKA_DENOMINATIONS.to_vec()).is_ok());
    }
}
