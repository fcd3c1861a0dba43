//! Naive trial division against every smaller integer.
//!
//! Each candidate `x` in `2..=max_int` is divided by every `y` in `2..x`.
//! This is O(max_int²) in the worst case and serves as the reference
//! implementation the fast finder is checked against.

use crate::bounds::SearchBounds;
use crate::finder::{PrimeFinder, PrimeList};

/// Finder that tests each candidate against all smaller integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlowPrimeFinder;

impl SlowPrimeFinder {
    /// Name reported by `PrimeFinder::name`.
    pub const NAME: &'static str = "SlowPrimeFinder";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn has_smaller_divisor(x: u64) -> bool {
        (2..x).any(|y| x % y == 0)
    }
}

impl PrimeFinder for SlowPrimeFinder {
    fn find(&self, max_int: u64, num_primes: usize) -> PrimeList {
        let bounds = SearchBounds::new(max_int, num_primes);
        // Zero requested primes means no candidate is tested at all.
        if bounds.is_empty() {
            return PrimeList::default();
        }

        let mut primes = Vec::with_capacity(bounds.capacity_hint());
        for x in 2..=max_int {
            if Self::has_smaller_divisor(x) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_up_to_ten() {
        let primes = SlowPrimeFinder::new().find(10, 100);
        assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
    }

    #[test]
    fn limit_two() {
        assert_eq!(SlowPrimeFinder::new().find(2, 100).as_slice(), &[2]);
    }

    #[test]
    fn stops_at_num_primes() {
        let primes = SlowPrimeFinder::new().find(100, 5);
        assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11]);
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(SlowPrimeFinder::new().find(11, 100).largest(), Some(11));
        assert_eq!(SlowPrimeFinder::new().find(12, 100).largest(), Some(11));
    }

    #[test]
    fn empty_for_small_limits() {
        let finder = SlowPrimeFinder::new();
        assert!(finder.find(0, 100).is_empty());
        assert!(finder.find(1, 100).is_empty());
    }

    #[test]
    fn empty_for_zero_primes() {
        assert!(SlowPrimeFinder::new().find(100_000, 0).is_empty());
    }

    #[test]
    fn first_hundred_primes() {
        let primes = SlowPrimeFinder::new().find(100_000, 100);
        assert_eq!(primes.len(), 100);
        assert_eq!(primes.largest(), Some(541));
    }

    #[test]
    fn divisor_check() {
        assert!(!SlowPrimeFinder::has_smaller_divisor(2));
        assert!(!SlowPrimeFinder::has_smaller_divisor(13));
        assert!(SlowPrimeFinder::has_smaller_divisor(9));
        assert!(SlowPrimeFinder::has_smaller_divisor(4));
    }

    #[test]
    fn finder_name() {
        assert_eq!(SlowPrimeFinder::default().name(), "SlowPrimeFinder");
    }
}
