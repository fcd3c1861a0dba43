//! Trial division against previously discovered primes.
//!
//! 2 is recorded up front so that only odd candidates need testing. Every
//! odd candidate is divided by each prime found so far, in ascending order.
//! Candidates are visited in increasing order, so every prime factor of a
//! composite candidate is already in the list when it is tested.
//!
//! There is no square-root cutoff: a prime candidate is checked against all
//! primes below it.

use crate::bounds::SearchBounds;
use crate::finder::{PrimeFinder, PrimeList};

/// Finder that tests odd candidates against the primes found so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastPrimeFinder;

impl FastPrimeFinder {
    /// Name reported by `PrimeFinder::name`.
    pub const NAME: &'static str = "FastPrimeFinder";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PrimeFinder for FastPrimeFinder {
    fn find(&self, max_int: u64, num_primes: usize) -> PrimeList {
        let bounds = SearchBounds::new(max_int, num_primes);
        if bounds.is_empty() {
            return PrimeList::default();
        }

        let mut primes = Vec::with_capacity(bounds.capacity_hint());
        primes.push(2);
        if primes.len() >= num_primes {
            return PrimeList::from(primes);
        }

        for x in (3..=max_int).step_by(2) {
            if primes.iter().any(|&p| x % p == 0) {
                continue;
            }
            primes.push(x);
            if primes.len() >= num_primes {
                break;
            }
        }

        PrimeList::from(primes)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
