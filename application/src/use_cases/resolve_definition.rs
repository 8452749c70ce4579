//! Resolve Definition use case
//!
//! Orchestrates the ordered fallback across definition sources:
//!
//! 1. A blank term resolves to not-found without any network call
//! 2. Sources are queried strictly one after another, in priority order
//! 3. The first source that matches wins; its payload is sanitized and returned
//! 4. If no source matches, the result is not-found with an empty body
//!
//! Results are never merged across sources and nothing is retried here.

use crate::ports::definition_source::DefinitionSource;
use crate::ports::progress::{NoProgress, ResolutionProgress};
use crate::ports::text_sanitizer::TextSanitizer;
use carcino_domain::{DefinitionResult, ResolutionState, SourceName, Term};
use std::sync::Arc;
use tracing::{debug, info};

/// Ordered multi-source resolution of a term into a clean definition
pub struct ResolutionPipeline {
    sources: Vec<Arc<dyn DefinitionSource>>,
    sanitizer: Arc<dyn TextSanitizer>,
}

impl ResolutionPipeline {
    /// Create a pipeline with no sources yet
    pub fn new(sanitizer: Arc<dyn TextSanitizer>) -> Self {
        Self {
            sources: Vec::new(),
            sanitizer,
        }
    }

    /// Append a source; sources are tried in the order they are added
    pub fn with_source(mut self, source: Arc<dyn DefinitionSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Append several sources in priority order
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Arc<dyn DefinitionSource>>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Source names in the order they are queried
    pub fn source_order(&self) -> Vec<SourceName> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve a term with default (no-op) progress
    pub async fn resolve(&self, term: &Term) -> DefinitionResult {
        self.resolve_with_progress(term, &NoProgress).await
    }

    /// Resolve a term, reporting each state transition
    pub async fn resolve_with_progress(
        &self,
        term: &Term,
        progress: &dyn ResolutionProgress,
    ) -> DefinitionResult {
        progress.on_state(term, &ResolutionState::Idle);

        if term.is_blank() {
            debug!("Blank term, skipping lookup");
            progress.on_state(term, &ResolutionState::Done { found: false });
            return DefinitionResult::not_found(term.clone(), None);
        }

        for (index, source) in self.sources.iter().enumerate() {
            let name = source.name();
            progress.on_state(
                term,
                &ResolutionState::Querying {
                    source: name,
                    attempt: index + 1,
                },
            );

            let result = source.lookup(term).await;
            if !result.is_found() {
                continue;
            }

            progress.on_state(term, &ResolutionState::Cleaning { source: name });
            let result = result.clean_with(|raw| self.sanitizer.clean(raw));
            if result.cleaned_body().is_empty() {
                debug!("{} matched '{}' but the body cleaned to nothing", name, term);
                continue;
            }

            info!("Resolved '{}' from {}", term, name);
            progress.on_state(term, &ResolutionState::Done { found: true });
            return result;
        }

        info!("No definition found for '{}'", term);
        progress.on_state(term, &ResolutionState::Done { found: false });
        DefinitionResult::not_found(term.clone(), None)
    }
}
