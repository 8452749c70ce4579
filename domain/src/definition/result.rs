//! Definition result value object

use super::source::{SourceEntry, SourceName};
use crate::term::Term;
use serde::Serialize;

/// Outcome of a single source lookup or of a whole resolution
///
/// Lives for one resolution request only. A result that was not found never
/// carries a body: the fields are private and the only way to attach text is
/// through [`DefinitionResult::found`] and [`DefinitionResult::clean_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionResult {
    term: Term,
    source: Option<SourceName>,
    raw_body: String,
    cleaned_body: String,
    title: Option<String>,
    url: Option<String>,
    found: bool,
}

impl DefinitionResult {
    /// A matched entry from `source`, not yet cleaned
    pub fn found(term: Term, source: SourceName, entry: SourceEntry) -> Self {
        Self {
            term,
            source: Some(source),
            raw_body: entry.body,
            cleaned_body: String::new(),
            title: entry.title,
            url: entry.url,
            found: true,
        }
    }

    /// No definition for `term`; `source` is the source that was asked, if any
    pub fn not_found(term: Term, source: Option<SourceName>) -> Self {
        Self {
            term,
            source,
            raw_body: String::new(),
            cleaned_body: String::new(),
            title: None,
            url: None,
            found: false,
        }
    }

    /// Fill `cleaned_body` (and tidy the title) with the given cleaning function.
    ///
    /// A not-found result is returned unchanged.
    pub fn clean_with(mut self, clean: impl Fn(&str) -> String) -> Self {
        if !self.found {
            return self;
        }
        self.cleaned_body = clean(&self.raw_body);
        self.title = self.title.map(|t| clean(&t)).filter(|t| !t.is_empty());
        self
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn source(&self) -> Option<SourceName> {
        self.source
    }

    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    pub fn cleaned_body(&self) -> &str {
        &self.cleaned_body
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_found(&self) -> bool {
        self.found
    }
}
