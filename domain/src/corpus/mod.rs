//! Autocomplete corpus
//!
//! A curated, immutable list of known terms. It is built once at startup and
//! shared by reference afterwards; it is only ever used for suggestions,
//! never for definition lookup.

mod suggestion;

pub use suggestion::SuggestionSet;

use crate::term::Term;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur while building a corpus
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("Term corpus contains no terms")]
    Empty,
}

/// Immutable set of curated terms, in insertion order
#[derive(Debug, Clone)]
pub struct TermCorpus {
    terms: Vec<Term>,
}

impl TermCorpus {
    /// Build a corpus from terms, dropping blanks and case-insensitive duplicates.
    ///
    /// The first occurrence of a term keeps its position.
    pub fn new<I, T>(terms: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<Term> = terms
            .into_iter()
            .map(Into::into)
            .filter(|term: &Term| !term.is_blank())
            .filter(|term| seen.insert(term.key().to_string()))
            .collect();

        if terms.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { terms })
    }

    /// Parse a line-delimited list. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Suggest up to `limit` terms containing `partial`, case-insensitively.
    ///
    /// Matches keep corpus order; a prefix match is not ranked above a
    /// substring match. An empty or whitespace-only `partial` yields an empty set.
    pub fn suggest(&self, partial: &str, limit: usize) -> SuggestionSet {
        let needle = Term::new(partial);
        if needle.is_blank() || limit == 0 {
            return SuggestionSet::empty();
        }
        let needle = needle.key();

        SuggestionSet::new(
            self.terms
                .iter()
                .filter(|t| t.key().contains(needle))
                .take(limit)
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> TermCorpus {
        TermCorpus::new(["cancer", "cancer staging", "candidiasis", "lung cancer"]).unwrap()
    }

    fn texts(set: &SuggestionSet) -> Vec<&str> {
        set.iter().map(Term::as_str).collect()
    }

    #[test]
    fn test_suggest_substring_matches() {
        let set = corpus().suggest("canc", 5);
        assert_eq!(texts(&set), vec!["cancer", "cancer staging", "lung cancer"]);
    }

    #[test]
    fn test_suggest_keeps_corpus_order_over_prefix() {
        let corpus = TermCorpus::new(["lung cancer", "cancer"]).unwrap();
        let set = corpus.suggest("canc", 5);
        assert_eq!(texts(&set), vec!["lung cancer", "cancer"]);
    }

    #[test]
    fn test_suggest_respects_limit_and_corpus_order() {
        let set = corpus().suggest("can", 3);
        assert_eq!(texts(&set), vec!["cancer", "cancer staging", "candidiasis"]);
    }

    #[test]
    fn test_suggest_is_case_insensitive() {
        let set = corpus().suggest("  LUNG ", 5);
        assert_eq!(texts(&set), vec!["lung cancer"]);
    }

    #[test]
    fn test_suggest_empty_partial() {
        assert!(corpus().suggest("", 5).is_empty());
        assert!(corpus().suggest("   ", 5).is_empty());
    }

    #[test]
    fn test_suggest_zero_limit() {
        assert!(corpus().suggest("can", 0).is_empty());
    }

    #[test]
    fn test_suggest_no_match() {
        assert!(corpus().suggest("xyz", 5).is_empty());
    }

    #[test]
    fn test_parse_skips_comments_blanks_and_duplicates() {
        let corpus = TermCorpus::parse("# curated\ncancer\n\n  Melanoma  \nCANCER\nmelanoma\n").unwrap();
        let terms: Vec<&str> = corpus.iter().map(Term::as_str).collect();
        assert_eq!(terms, vec!["cancer", "Melanoma"]);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(TermCorpus::parse("# nothing here\n\n").unwrap_err(), CorpusError::Empty);
    }
}
