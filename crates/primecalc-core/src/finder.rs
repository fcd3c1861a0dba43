//! The `PrimeFinder` capability, its result list, and the error type.
//!
//! `PrimeFinder` is implemented by `SlowPrimeFinder` and `FastPrimeFinder`.
//! Both stop as soon as `num_primes` primes are collected or once every
//! candidate up to `max_int` has been tested.

use std::ops::Deref;

use serde::Serialize;

/// Error type for prime searches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimeError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The two finders produced different lists for the same bounds.
    #[error("result mismatch between algorithms (limit {max_int}, numprimes {num_primes})")]
    Mismatch {
        /// Upper bound of the failing search.
        max_int: u64,
        /// Prime count of the failing search.
        num_primes: usize,
    },
}

/// Ascending list of primes produced by a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeList(Vec<u64>);

impl PrimeList {
    /// Number of primes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Consume the list and return the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// Largest prime found, if any.
    #[must_use]
    pub fn largest(&self) -> Option<u64> {
        self.0.last().copied()
    }
}

impl From<Vec<u64>> for PrimeList {
    fn from(primes: Vec<u64>) -> Self {
        Self(primes)
    }
}

impl Deref for PrimeList {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A trial-division prime generator.
pub trait PrimeFinder {
    /// Collect primes `<= max_int` in ascending order, stopping once
    /// `num_primes` have been found.
    fn find(&self, max_int: u64, num_primes: usize) -> PrimeList;

    /// Get the name of this finder.
    fn name(&self) -> &str;
}
