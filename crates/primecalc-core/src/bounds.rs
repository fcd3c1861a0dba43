//! Search bounds.

use serde::Serialize;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_NUM_PRIMES, PREALLOC_MAX};

/// The pair of limits that governs when a prime search stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchBounds {
    /// Largest candidate that may be tested.
    pub max_int: u64,
    /// Largest number of primes to collect.
    pub num_primes: usize,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_NUM_PRIMES)
    }
}

impl SearchBounds {
    #[must_use]
    pub const fn new(max_int: u64, num_primes: usize) -> Self {
        Self {
            max_int,
            num_primes,
        }
    }

    /// Build bounds from signed user input. Negative values clamp to zero,
    /// which yields an empty search.
    #[must_use]
    pub fn from_signed(max_int: i64, num_primes: i64) -> Self {
        Self {
            max_int: u64::try_from(max_int).unwrap_or(0),
            num_primes: usize::try_from(num_primes).unwrap_or(0),
        }
    }

    /// True when no candidate can ever be accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_int < 2 || self.num_primes == 0
    }

    /// Initial capacity for the prime list of a search over these bounds.
    pub(crate) fn capacity_hint(&self) -> usize {
        let range = usize::try_from(self.max_int / 2 + 1).unwrap_or(usize::MAX);
        self.num_primes.min(range).min(PREALLOC_MAX)
    }
}
