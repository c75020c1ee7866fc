//! TUI application state

use crate::core::amount::AmountBuffer;
use crate::core::change::{Breakdown, ChangeCalculator};

/// Vangtichai application state
///
/// Holds the entered amount and the calculator. The breakdown is derived:
/// it is recomputed from scratch on every query rather than cached or
/// updated incrementally - the computation is cheap and the result has the
/// same lifetime as the amount that produced it.
#[derive(Debug)]
pub struct VangtiChaiApp {
    /// Current amount entry buffer
    buffer: AmountBuffer,
    /// Change calculator over the denomination set
    calculator: ChangeCalculator,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for VangtiChaiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl VangtiChaiApp {
    /// Creates the app over the fixed taka denomination set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: AmountBuffer::new(),
            calculator: ChangeCalculator::new(),
            should_quit: false,
        }
    }

    /// Creates the app over a custom calculator.
    #[must_use]
    pub fn with_calculator(calculator: ChangeCalculator) -> Self {
        Self {
            buffer: AmountBuffer::new(),
            calculator,
            should_quit: false,
        }
    }

    /// The current amount entry buffer.
    #[must_use]
    pub fn buffer(&self) -> &AmountBuffer {
        &self.buffer
    }

    /// The current amount as an integer.
    #[must_use]
    pub fn amount(&self) -> u64 {
        self.buffer.value()
    }

    /// The amount readout line.
    #[must_use]
    pub fn amount_display(&self) -> String {
        format!("Taka: {}", self.buffer.as_str())
    }

    /// Computes the breakdown for the current amount.
    ///
    /// Recomputed in full on every call.
    #[must_use]
    pub fn breakdown(&self) -> Breakdown {
        self.calculator.breakdown(self.amount())
    }

    /// Applies a digit press from the keypad or keyboard.
    pub fn press_digit(&mut self, digit: u8) {
        self.buffer.press_digit(digit);
        tracing::debug!(amount = self.amount(), "amount updated");
    }

    /// Clears the entered amount.
    pub fn clear(&mut self) {
        self.buffer.clear();
        tracing::debug!("amount cleared");
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
