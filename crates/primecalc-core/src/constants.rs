//! Defaults, limits, and exit codes shared across the workspace.

/// Default upper bound for candidates (`-l`).
pub const DEFAULT_LIMIT: u64 = 100_000;

/// Default number of primes to collect (`-n`).
pub const DEFAULT_NUM_PRIMES: usize = 100;

/// Largest number of primes a single search may request.
pub const MAX_NUM_PRIMES: usize = 1_000_000;

/// Number of primes printed per output row.
pub const PRIMES_PER_LINE: usize = 10;

/// Upper bound on the up-front allocation for a prime list.
pub(crate) const PREALLOC_MAX: usize = 4096;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid command line or configuration.
    pub const ERROR_USAGE: i32 = 2;
    /// The slow and fast finders disagreed during verification.
    pub const ERROR_MISMATCH: i32 = 3;
}
