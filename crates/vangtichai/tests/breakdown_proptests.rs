//! Property-based tests for the change calculator
//!
//! The greedy result is checked against an independent dynamic-programming
//! reference: for a canonical denomination system the two must agree on the
//! minimal piece count everywhere.

use std::sync::OnceLock;

use proptest::prelude::*;
use vangtichai::prelude::*;

const REFERENCE_LIMIT: usize = 100_000;

/// Minimal piece counts for every amount up to `REFERENCE_LIMIT`, computed
/// by brute-force dynamic programming over the taka set.
fn reference_piece_counts() -> &'static [u64] {
    static TABLE: OnceLock<Vec<u64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = vec![u64::MAX; REFERENCE_LIMIT + 1];
        table[0] = 0;
        for amount in 1..=REFERENCE_LIMIT {
            let mut best = u64::MAX;
            for denomination in TAKA_DENOMINATIONS {
                let denomination = denomination as usize;
                if denomination <= amount && table[amount - denomination] != u64::MAX {
                    best = best.min(table[amount - denomination] + 1);
                }
            }
            table[amount] = best;
        }
        table
    })
}

// ===== Strategy definitions =====

/// Any amount the UI can produce (nine digits)
fn amount_strategy() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000u64
}

/// Amounts covered by the reference table
fn small_amount_strategy() -> impl Strategy<Value = usize> {
    0usize..=REFERENCE_LIMIT
}

// ===== Exhaustive reference comparison =====

#[test]
fn greedy_matches_reference_minimality_exhaustively() {
    let calculator = ChangeCalculator::new();
    let reference = reference_piece_counts();
    for (amount, &minimal) in reference.iter().enumerate() {
        let greedy = calculator.breakdown(amount as u64).piece_count();
        assert_eq!(
            greedy, minimal,
            "greedy used {greedy} pieces for {amount}, minimum is {minimal}"
        );
    }
}

// ===== Property tests =====

proptest! {
    /// The weighted sum of every breakdown reproduces its amount exactly
    #[test]
    fn prop_sum_invariant(amount in amount_strategy()) {
        let breakdown = ChangeCalculator::new().breakdown(amount);
        prop_assert_eq!(breakdown.total(), amount);
    }

    /// Every breakdown has exactly one entry per taka denomination
    #[test]
    fn prop_completeness(amount in amount_strategy()) {
        let breakdown = ChangeCalculator::new().breakdown(amount);
        prop_assert_eq!(breakdown.len(), 8);
        for denomination in TAKA_DENOMINATIONS {
            prop_assert!(breakdown.count_of(denomination).is_some());
        }
    }

    /// Entries iterate in strictly descending denomination order
    #[test]
    fn prop_descending_order(amount in amount_strategy()) {
        let breakdown = ChangeCalculator::new().breakdown(amount);
        let denominations: Vec<u64> = breakdown.iter().map(|(d, _)| d).collect();
        for pair in denominations.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    /// Equal amounts always produce identical breakdowns
    #[test]
    fn prop_deterministic(amount in amount_strategy()) {
        let calculator = ChangeCalculator::new();
        prop_assert_eq!(calculator.breakdown(amount), calculator.breakdown(amount));
    }

    /// Greedy piece count equals the brute-force minimum on the taka set
    #[test]
    fn prop_greedy_minimal(amount in small_amount_strategy()) {
        let greedy = ChangeCalculator::new().breakdown(amount as u64).piece_count();
        prop_assert_eq!(greedy, reference_piece_counts()[amount]);
    }

    /// The sum invariant holds for any valid custom denomination set
    #[test]
    fn prop_sum_invariant_any_valid_set(
        amount in 0u64..1_000_000u64,
        mut extra in proptest::collection::vec(2u64..10_000u64, 0..6),
    ) {
        extra.sort_unstable();
        extra.dedup();
        extra.reverse();
        extra.push(1);
        let set = DenominationSet::new(extra).unwrap();
        let calculator = ChangeCalculator::with_denominations(set);
        prop_assert_eq!(calculator.breakdown(amount).total(), amount);
    }
}

// ===== Amount buffer properties =====

/// A discrete keypad event
#[derive(Debug, Clone, Copy)]
enum EntryEvent {
    Digit(u8),
    Clear,
}

fn event_strategy() -> impl Strategy<Value = EntryEvent> {
    prop_oneof![
        4 => (0u8..=9u8).prop_map(EntryEvent::Digit),
        1 => Just(EntryEvent::Clear),
    ]
}

proptest! {
    /// No event sequence can push the buffer past nine digits or 10^9
    #[test]
    fn prop_buffer_bounded(events in proptest::collection::vec(event_strategy(), 0..64)) {
        let mut buffer = AmountBuffer::new();
        for event in events {
            match event {
                EntryEvent::Digit(d) => buffer.press_digit(d),
                EntryEvent::Clear => buffer.clear(),
            }
            prop_assert!(buffer.digit_count() <= AmountBuffer::MAX_DIGITS);
            prop_assert!(buffer.value() < 1_000_000_000);
        }
    }

    /// The buffer never carries leading zeros, so display and value agree
    #[test]
    fn prop_buffer_display_matches_value(
        events in proptest::collection::vec(event_strategy(), 0..64),
    ) {
        let mut buffer = AmountBuffer::new();
        for event in events {
            match event {
                EntryEvent::Digit(d) => buffer.press_digit(d),
                EntryEvent::Clear => buffer.clear(),
            }
        }
        prop_assert_eq!(buffer.as_str(), buffer.value().to_string());
    }

    /// Clear always returns the buffer to its initial state
    #[test]
    fn prop_clear_resets(events in proptest::collection::vec(event_strategy(), 0..32)) {
        let mut buffer = AmountBuffer::new();
        for event in events {
            match event {
                EntryEvent::Digit(d) => buffer.press_digit(d),
                EntryEvent::Clear => buffer.clear(),
            }
        }
        buffer.clear();
        prop_assert_eq!(buffer, AmountBuffer::new());
    }
}
