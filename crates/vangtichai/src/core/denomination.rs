//! Denomination sets
//!
//! The set is an explicit, injected sequence rather than a constant baked
//! into the calculator, so the greedy decomposition is reusable for other
//! currency systems. Validation happens once at construction; everything
//! downstream relies on the invariants without re-checking them.

use serde::Serialize;

use crate::core::{ChangeError, ChangeResult};

/// The Bangladeshi taka note/coin values, largest first.
pub const TAKA_DENOMINATIONS: [u64; 8] = [500, 100, 50, 20, 10, 5, 2, 1];

/// An ordered sequence of denominations: strictly descending, ending in 1.
///
/// The trailing 1 is what makes greedy decomposition total - it absorbs any
/// remainder the larger denominations leave, so the weighted sum of a
/// breakdown always reproduces the input amount exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    /// Creates a validated denomination set.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty, contains a zero, is not
    /// strictly descending, or does not end in 1.
    pub fn new(values: impl Into<Vec<u64>>) -> ChangeResult<Self> {
        let values = values.into();

        if values.is_empty() {
            return Err(ChangeError::EmptyDenominations);
        }
        if let Some(index) = values.iter().position(|&v| v == 0) {
            return Err(ChangeError::ZeroDenomination { index });
        }
        for pair in values.windows(2) {
            if pair[1] >= pair[0] {
                return Err(ChangeError::NotDescending {
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        if let Some(&last) = values.last() {
            if last != 1 {
                return Err(ChangeError::MissingUnit { last });
            }
        }

        Ok(Self { values })
    }

    /// The fixed taka set used by the app.
    #[must_use]
    pub fn taka() -> Self {
        Self {
            values: TAKA_DENOMINATIONS.to_vec(),
        }
    }

    /// Returns the denominations, largest first.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Number of denominations in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set has no denominations.
    ///
    /// Always false for a constructed set; present for container-API parity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the denominations, largest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self::taka()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Construction tests =====

    #[test]
    fn test_taka_set() {
        let set = DenominationSet::taka();
        assert_eq!(set.values(), &[500, 100, 50, 20, 10, 5, 2, 1]);
        assert_eq!(set.len(), 8);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_default_is_taka() {
        assert_eq!(DenominationSet::default(), DenominationSet::taka());
    }

    #[test]
    fn test_new_accepts_taka_values() {
        let set = DenominationSet::new(TAKA_DENOMINATIONS.to_vec()).unwrap();
        assert_eq!(set, DenominationSet::taka());
    }

    #[test]
    fn test_new_accepts_unit_only() {
        let set = DenominationSet::new(vec![1]).unwrap();
        assert_eq!(set.values(), &[1]);
    }

    // ===== Validation tests =====

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            DenominationSet::new(Vec::new()),
            Err(ChangeError::EmptyDenominations)
        );
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            DenominationSet::new(vec![10, 5, 0, 1]),
            Err(ChangeError::ZeroDenomination { index: 2 })
        );
    }

    #[test]
    fn test_new_rejects_ascending() {
        assert_eq!(
            DenominationSet::new(vec![5, 10, 1]),
            Err(ChangeError::NotDescending {
                previous: 5,
                current: 10
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            DenominationSet::new(vec![10, 10, 1]),
            Err(ChangeError::NotDescending {
                previous: 10,
                current: 10
            })
        );
    }

    #[test]
    fn test_new_rejects_missing_unit() {
        assert_eq!(
            DenominationSet::new(vec![10, 5, 2]),
            Err(ChangeError::MissingUnit { last: 2 })
        );
    }

    // ===== Accessor tests =====

    #[test]
    fn test_iter_order() {
        let set = DenominationSet::taka();
        let collected: Vec<u64> = set.iter().collect();
        assert_eq!(collected, vec![500, 100, 50, 20, 10, 5, 2, 1]);
    }

    #[test]
    fn test_clone_eq() {
        let set = DenominationSet::taka();
        assert_eq!(set.clone(), set);
    }
}
