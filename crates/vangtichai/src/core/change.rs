//! Greedy change-making
//!
//! One pass over the denomination set, largest first: take as many of each
//! denomination as fit, carry the remainder down. The set's trailing 1
//! absorbs whatever is left, so the weighted sum of the counts always
//! reproduces the input amount.

use serde::Serialize;

use crate::core::denomination::DenominationSet;

/// Count of one denomination within a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    /// The note/coin value
    pub denomination: u64,
    /// How many of that note/coin are used
    pub count: u64,
}

/// Per-denomination counts for one amount, largest denomination first.
///
/// Contains exactly one entry per denomination of the set that produced it,
/// zero counts included. A breakdown is a derived value: it is recomputed in
/// full for every amount and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    /// Returns the entries, largest denomination first.
    #[must_use]
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    /// Returns the count recorded for a denomination, if it is in the set.
    #[must_use]
    pub fn count_of(&self, denomination: u64) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.denomination == denomination)
            .map(|entry| entry.count)
    }

    /// Weighted sum of the entries; equals the amount that produced this
    /// breakdown.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.denomination * entry.count)
            .sum()
    }

    /// Total number of notes and coins used.
    #[must_use]
    pub fn piece_count(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Number of entries (one per denomination in the set).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the breakdown has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.denomination, entry.count))
    }

    /// Serializes the entries to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

/// Greedy change calculator over an injected denomination set.
///
/// Pure and stateless between calls: results depend only on the input, so
/// the calculator can be shared and invoked from any context.
#[derive(Debug, Clone)]
pub struct ChangeCalculator {
    denominations: DenominationSet,
}

impl Default for ChangeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeCalculator {
    /// Creates a calculator over the fixed taka set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            denominations: DenominationSet::taka(),
        }
    }

    /// Creates a calculator over a custom denomination set.
    #[must_use]
    pub fn with_denominations(denominations: DenominationSet) -> Self {
        Self { denominations }
    }

    /// Returns the denomination set in use.
    #[must_use]
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Decomposes `amount` into per-denomination counts.
    ///
    /// Greedy, largest denomination first: `count = remainder / d`, then
    /// `remainder %= d`. Exactly one entry per denomination of the set, zero
    /// counts included, and the weighted sum of the result equals `amount`.
    #[must_use]
    pub fn breakdown(&self, amount: u64) -> Breakdown {
        let mut remainder = amount;
        let mut entries = Vec::with_capacity(self.denominations.len());

        for denomination in self.denominations.iter() {
            let count = remainder / denomination;
            remainder %= denomination;
            entries.push(BreakdownEntry {
                denomination,
                count,
            });
        }

        tracing::debug!(amount, "computed breakdown");
        Breakdown { entries }
    }
}
