//! Suggestion set value object

use crate::term::Term;
use serde::Serialize;

/// Ordered autocomplete suggestions for the current input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionSet {
    terms: Vec<Term>,
}

impl SuggestionSet {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn first(&self) -> Option<&Term> {
        self.terms.first()
    }
}

impl IntoIterator for SuggestionSet {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
