//! Lookup configuration from TOML (`[lookup]` and `[suggest]` sections)

use crate::sources::{DEFAULT_USER_AGENT, HttpOptions};
use carcino_application::LookupConfig;
use carcino_application::config::{DEFAULT_MAX_IN_FLIGHT, DEFAULT_SUGGEST_LIMIT, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Raw `[lookup]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Per-request timeout for every source, in seconds
    pub timeout_secs: u64,
    /// User agent sent to the sources
    pub user_agent: Option<String>,
    /// Lookups allowed to run at the same time
    pub max_in_flight: usize,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

impl FileLookupConfig {
    /// HTTP settings for the sources; the timeout comes from `lookup`
    pub fn to_http_options(&self, lookup: &LookupConfig) -> HttpOptions {
        let user_agent = self
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT);
        HttpOptions {
            timeout: lookup.timeout,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn to_lookup_config(&self, suggest: &FileSuggestConfig) -> LookupConfig {
        LookupConfig::default()
            .with_timeout_seconds(self.timeout_secs)
            .with_max_in_flight(self.max_in_flight)
            .with_suggest_limit(suggest.limit)
    }
}

/// Raw `[suggest]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSuggestConfig {
    /// Maximum suggestions per partial input
    pub limit: usize,
}

impl Default for FileSuggestConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = FileLookupConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let lookup = config.to_lookup_config(&FileSuggestConfig::default());
        assert_eq!(
            config.to_http_options(&lookup).timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_http_timeout_follows_lookup_config() {
        let config = FileLookupConfig {
            timeout_secs: 7,
            ..Default::default()
        };
        let lookup = config.to_lookup_config(&FileSuggestConfig::default());
        assert_eq!(lookup.timeout, Duration::from_secs(7));
        assert_eq!(config.to_http_options(&lookup).timeout, lookup.timeout);
    }

    #[test]
    fn test_blank_user_agent_uses_default() {
        let config = FileLookupConfig {
            user_agent: Some("  ".to_string()),
            ..Default::default()
        };
        let lookup = LookupConfig::default();
        assert_eq!(config.to_http_options(&lookup).user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_to_lookup_config() {
        let config = FileLookupConfig {
            timeout_secs: 3,
            user_agent: None,
            max_in_flight: 2,
        };
        let lookup = config.to_lookup_config(&FileSuggestConfig { limit: 5 });
        assert_eq!(lookup.timeout, Duration::from_secs(3));
        assert_eq!(lookup.max_in_flight, 2);
        assert_eq!(lookup.suggest_limit, 5);
    }

    #[test]
    fn test_zero_suggest_limit_uses_default() {
        let lookup = FileLookupConfig::default().to_lookup_config(&FileSuggestConfig { limit: 0 });
        assert_eq!(lookup.suggest_limit, DEFAULT_SUGGEST_LIMIT);
    }
}
