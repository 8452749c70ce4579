//! Application-level configuration.
//!
//! Controls how lookups are scheduled and how much autocomplete returns.

use std::time::Duration;

/// Default per-call timeout for a definition source
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of lookups allowed in flight at once
pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;

/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGEST_LIMIT: usize = 8;

/// Lookup behavior configuration.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Upper bound on each source call.
    pub timeout: Duration,
    /// Maximum number of resolutions the executor runs concurrently.
    pub max_in_flight: usize,
    /// Maximum number of suggestions returned for a partial input.
    pub suggest_limit: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

impl LookupConfig {
    /// Creates a LookupConfig with a timeout specified in seconds.
    ///
    /// Zero is treated as the default timeout; a source call is never unbounded.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = if seconds == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(seconds)
        };
        self
    }

    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max.max(1);
        self
    }

    /// Zero is treated as the default limit.
    pub fn with_suggest_limit(mut self, limit: usize) -> Self {
        self.suggest_limit = if limit == 0 {
            DEFAULT_SUGGEST_LIMIT
        } else {
            limit
        };
        self
    }
}
