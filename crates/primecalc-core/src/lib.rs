//! # primecalc-core
//!
//! Core library for the primecalc prime enumerator.
//! Implements a naive and a prime-list trial-division finder behind a
//! shared `PrimeFinder` contract.

pub mod bounds;
pub mod constants;
pub mod fast;
pub mod finder;
pub mod method;
pub mod search;
pub mod slow;

// Re-exports
pub use bounds::SearchBounds;
pub use constants::{
    exit_codes, DEFAULT_LIMIT, DEFAULT_NUM_PRIMES, MAX_NUM_PRIMES, PRIMES_PER_LINE,
};
pub use fast::FastPrimeFinder;
pub use finder::{PrimeError, PrimeFinder, PrimeList};
pub use method::Method;
pub use search::{analyze_comparison, run_all, run_search, SearchReport};
pub use slow::SlowPrimeFinder;

/// Collect up to `num_primes` primes `<= max_int` with the fast finder.
///
/// # Example
/// ```
/// assert_eq!(primecalc_core::primes(10, 100).as_slice(), &[2, 3, 5, 7]);
/// assert!(primecalc_core::primes(1, 100).is_empty());
/// ```
#[must_use]
pub fn primes(max_int: u64, num_primes: usize) -> PrimeList {
    FastPrimeFinder::new().find(max_int, num_primes)
}
