//! **Definition sources**: HTTP adapters for the
//! [`DefinitionSource`](carcino_application::DefinitionSource) port.
//!
//! | Source | Endpoint | Payload |
//! |--------|----------|---------|
//! | [`MedlinePlusClient`] | MedlinePlus Connect web service | XML (`nlmSearchResult`) |
//! | [`WikipediaClient`] | Wikipedia REST `page/summary` (+ `opensearch` for disambiguation) | JSON |
//!
//! Both share one `reqwest::Client` whose timeout bounds every request; the
//! Wikipedia client additionally bounds its multi-request lookups as a whole.
//! Neither retries. [`default_sources`] returns them in priority order: MedlinePlus
//! first, Wikipedia as fallback.

mod medlineplus;
mod wikipedia;

pub use medlineplus::{MEDLINEPLUS_CONNECT_URL, MedlineLanguage, MedlinePlusClient, MedlinePlusConfig};
pub use wikipedia::{DEFAULT_MAX_SENTENCES, WikipediaClient, WikipediaConfig};

use carcino_application::{DefinitionSource, SourceError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// User agent sent to every source
pub const DEFAULT_USER_AGENT: &str = concat!(
    "CarcinoTermFinder/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/carcino-foundation/carcino-term-finder)"
);

/// Errors constructing a source (bad endpoint, HTTP client setup)
#[derive(Error, Debug)]
pub enum SourceSetupError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// HTTP settings shared by all sources
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Upper bound on each request, connect included
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(carcino_application::config::DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build_client(&self) -> Result<reqwest::Client, SourceSetupError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

/// MedlinePlus then Wikipedia, sharing one HTTP client
pub fn default_sources(
    medlineplus: MedlinePlusConfig,
    wikipedia: WikipediaConfig,
    http: &HttpOptions,
) -> Result<Vec<Arc<dyn DefinitionSource>>, SourceSetupError> {
    let client = http.build_client()?;
    let primary: Arc<dyn DefinitionSource> =
        Arc::new(MedlinePlusClient::with_client(client.clone(), medlineplus)?);
    let fallback: Arc<dyn DefinitionSource> =
        Arc::new(WikipediaClient::with_client(client, wikipedia)?.with_call_timeout(http.timeout));
    Ok(vec![primary, fallback])
}

/// Map a transport error onto the source error taxonomy
pub(crate) fn classify(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else if e.is_decode() {
        SourceError::Parse(e.to_string())
    } else if let Some(status) = e.status() {
        SourceError::Http(status.as_u16())
    } else {
        SourceError::Network(e.to_string())
    }
}

/// Parse an endpoint that must accept path segments
pub(crate) fn parse_endpoint(url: &str) -> Result<reqwest::Url, SourceSetupError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| SourceSetupError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(SourceSetupError::InvalidUrl {
            url: url.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }
    Ok(parsed)
}
