//! Timed searches and cross-verification of the two finders.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::bounds::SearchBounds;
use crate::finder::{PrimeError, PrimeList};
use crate::method::Method;

/// Outcome of one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Algorithm that produced the list.
    pub method: Method,
    /// Bounds the search ran with.
    pub bounds: SearchBounds,
    /// Primes found, ascending.
    pub primes: PrimeList,
    /// Wall-clock time spent in the finder.
    #[serde(skip)]
    pub duration: Duration,
}

impl SearchReport {
    /// Number of primes found.
    #[must_use]
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    /// True when the search stopped because `num_primes` was reached.
    #[must_use]
    pub fn reached_count(&self) -> bool {
        self.primes.len() >= self.bounds.num_primes
    }
}

/// Run one finder over the given bounds and time it.
pub fn run_search(method: Method, bounds: SearchBounds) -> SearchReport {
    debug!(
        %method,
        max_int = bounds.max_int,
        num_primes = bounds.num_primes,
        "starting prime search"
    );

    let start = Instant::now();
    let primes = method.find(bounds);
    let duration = start.elapsed();

    info!(
        %method,
        found = primes.len(),
        elapsed = ?duration,
        "prime search finished"
    );

    SearchReport {
        method,
        bounds,
        primes,
        duration,
    }
}

/// Run every finder over the same bounds.
pub fn run_all(bounds: SearchBounds) -> Vec<SearchReport> {
    Method::ALL
        .iter()
        .map(|&method| run_search(method, bounds))
        .collect()
}

/// Check that every report holds the same prime list.
pub fn analyze_comparison(reports: &[SearchReport]) -> Result<(), PrimeError> {
    let Some((first, rest)) = reports.split_first() else {
        return Err(PrimeError::Config("no search results to compare".into()));
    };

    for report in rest {
        if report.primes != first.primes {
            warn!(
                left = %first.method,
                right = %report.method,
                left_count = first.count(),
                right_count = report.count(),
                "finders disagree"
            );
            return Err(PrimeError::Mismatch {
                max_int: first.bounds.max_int,
                num_primes: first.bounds.num_primes,
            });
        }
    }

    Ok(())
}
