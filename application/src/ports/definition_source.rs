//! Definition source port
//!
//! Defines the interface for querying an external authority for a term.

use async_trait::async_trait;
use carcino_domain::{DefinitionResult, SourceEntry, SourceName, Term};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors a source can hit while fetching a definition
///
/// None of these reach the caller of [`DefinitionSource::lookup`]; they are
/// logged and collapsed into a not-found result.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Malformed response: {0}")]
    Parse(String),
}

/// An external authority that can define a term
///
/// Implementations only provide [`fetch`](DefinitionSource::fetch); the
/// provided [`lookup`](DefinitionSource::lookup) turns its outcome into a
/// [`DefinitionResult`]. Implementations must bound each call with a timeout
/// and must not retry.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Which authority this is
    fn name(&self) -> SourceName;

    /// Query the source. `Ok(None)` means the source answered but has no entry.
    async fn fetch(&self, term: &Term) -> Result<Option<SourceEntry>, SourceError>;

    /// Look up a term; failures are reported as not found.
    async fn lookup(&self, term: &Term) -> DefinitionResult {
        let source = self.name();
        match self.fetch(term).await {
            Ok(Some(entry)) => {
                debug!("{} matched '{}'", source, term);
                DefinitionResult::found(term.clone(), source, entry)
            }
            Ok(None) => {
                debug!("{} has no entry for '{}'", source, term);
                DefinitionResult::not_found(term.clone(), Some(source))
            }
            Err(e) => {
                warn!("{} lookup for '{}' failed: {}", source, term, e);
                DefinitionResult::not_found(term.clone(), Some(source))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Option<&'static str>, fn() -> SourceError>);

    #[async_trait]
    impl DefinitionSource for FixedSource {
        fn name(&self) -> SourceName {
            SourceName::MedlinePlus
        }

        async fn fetch(&self, _term: &Term) -> Result<Option<SourceEntry>, SourceError> {
            match &self.0 {
                Ok(body) => Ok(body.map(SourceEntry::new)),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let result = FixedSource(Ok(Some("<p>def</p>")))
            .lookup(&Term::new("tumor"))
            .await;
        assert!(result.is_found());
        assert_eq!(result.raw_body(), "<p>def</p>");
        assert_eq!(result.source(), Some(SourceName::MedlinePlus));
    }

    #[tokio::test]
    async fn test_lookup_no_entry() {
        let result = FixedSource(Ok(None)).lookup(&Term::new("tumor")).await;
        assert!(!result.is_found());
        assert_eq!(result.cleaned_body(), "");
    }

    #[tokio::test]
    async fn test_lookup_errors_collapse_to_not_found() {
        for make in [
            (|| SourceError::Timeout) as fn() -> SourceError,
            || SourceError::Network("dns".to_string()),
            || SourceError::Http(503),
            || SourceError::Parse("bad xml".to_string()),
        ] {
            let result = FixedSource(Err(make)).lookup(&Term::new("tumor")).await;
            assert!(!result.is_found());
            assert_eq!(result.raw_body(), "");
        }
    }

    #[test]
    fn test_source_error_display() {
        assert_eq!(SourceError::Timeout.to_string(), "Request timed out");
        assert_eq!(SourceError::Http(404).to_string(), "HTTP error: 404");
    }
}
