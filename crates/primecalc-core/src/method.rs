//! Algorithm selection.

use std::fmt;

use serde::Serialize;

use crate::bounds::SearchBounds;
use crate::fast::FastPrimeFinder;
use crate::finder::{PrimeError, PrimeFinder, PrimeList};
use crate::slow::SlowPrimeFinder;

/// The prime-finding algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Trial division by every smaller integer (`-m 0`).
    #[default]
    Slow,
    /// Trial division by previously found primes (`-m 1`).
    Fast,
}

impl Method {
    /// Every method, in command-line code order.
    pub const ALL: [Method; 2] = [Method::Slow, Method::Fast];

    /// Resolve a numeric command-line code.
    pub fn from_code(code: i64) -> Result<Self, PrimeError> {
        match code {
            0 => Ok(Self::Slow),
            1 => Ok(Self::Fast),
            _ => Err(PrimeError::Config(format!("unknown method: {code}"))),
        }
    }

    /// The numeric command-line code of this method.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Slow => 0,
            Self::Fast => 1,
        }
    }

    /// Run the selected finder.
    #[must_use]
    pub fn find(self, bounds: SearchBounds) -> PrimeList {
        match self {
            Self::Slow => SlowPrimeFinder::new().find(bounds.max_int, bounds.num_primes),
            Self::Fast => FastPrimeFinder::new().find(bounds.max_int, bounds.num_primes),
        }
    }

    /// Name of the finder behind this method.
    #[must_use]
    pub fn finder_name(self) -> &'static str {
        match self {
            Self::Slow => SlowPrimeFinder::NAME,
            Self::Fast => FastPrimeFinder::NAME,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slow => f.write_str("slow"),
            Self::Fast => f.write_str("fast"),
        }
    }
}
