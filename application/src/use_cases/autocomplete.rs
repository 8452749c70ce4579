//! Autocomplete use case
//!
//! Suggests known terms while the user types. Autocomplete is independent of
//! definition lookup: when the corpus failed to load it is simply disabled and
//! every query yields an empty [`SuggestionSet`].

use crate::config::DEFAULT_SUGGEST_LIMIT;
use carcino_domain::{SuggestionSet, TermCorpus};
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

/// Prefix/substring suggestions over the curated corpus
#[derive(Clone)]
pub struct Autocomplete {
    corpus: Option<Arc<TermCorpus>>,
    limit: usize,
}

impl Autocomplete {
    pub fn new(corpus: Arc<TermCorpus>) -> Self {
        Self {
            corpus: Some(corpus),
            limit: DEFAULT_SUGGEST_LIMIT,
        }
    }

    /// Autocomplete without a corpus; always suggests nothing
    pub fn disabled() -> Self {
        Self {
            corpus: None,
            limit: DEFAULT_SUGGEST_LIMIT,
        }
    }

    /// Build from the outcome of loading the corpus, disabling on error
    pub fn from_load<E: Display>(loaded: Result<TermCorpus, E>) -> Self {
        match loaded {
            Ok(corpus) => Self::new(Arc::new(corpus)),
            Err(e) => {
                warn!("Autocomplete disabled: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.corpus.is_some()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Suggestions for `partial` using the configured limit
    pub fn suggest(&self, partial: &str) -> SuggestionSet {
        self.suggest_with_limit(partial, self.limit)
    }

    pub fn suggest_with_limit(&self, partial: &str, limit: usize) -> SuggestionSet {
        match &self.corpus {
            Some(corpus) => corpus.suggest(partial, limit),
            None => SuggestionSet::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcino_domain::{CorpusError, Term};

    fn corpus() -> TermCorpus {
        TermCorpus::new(["cancer", "cancer staging", "candidiasis", "lung cancer"]).unwrap()
    }

    #[test]
    fn test_suggest_uses_configured_limit() {
        let autocomplete = Autocomplete::new(Arc::new(corpus())).with_limit(2);
        let terms: Vec<String> = autocomplete
            .suggest("can")
            .iter()
            .map(Term::to_string)
            .collect();
        assert_eq!(terms, vec!["cancer", "cancer staging"]);
    }

    #[test]
    fn test_failed_load_disables_autocomplete() {
        let autocomplete = Autocomplete::from_load(Err::<TermCorpus, _>(CorpusError::Empty));
        assert!(!autocomplete.is_enabled());
        assert!(autocomplete.suggest("can").is_empty());
    }

    #[test]
    fn test_successful_load_enables_autocomplete() {
        let autocomplete = Autocomplete::from_load(Ok::<_, CorpusError>(corpus()));
        assert!(autocomplete.is_enabled());
        assert_eq!(autocomplete.suggest_with_limit("lung", 5).len(), 1);
    }
}
