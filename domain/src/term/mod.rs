//! Term value object

use crate::core::string::collapse_whitespace;
use serde::{Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// A normalized query string (Value Object)
///
/// Built from raw user input: surrounding whitespace is trimmed and inner
/// runs of whitespace are collapsed. The display text keeps the user's
/// casing (it is what gets sent to the sources); equality, hashing and
/// matching use the case-folded key.
///
/// A term may be blank; the resolution pipeline answers blank terms with a
/// not-found result without touching the network.
#[derive(Debug, Clone)]
pub struct Term {
    text: String,
    key: String,
}

impl Term {
    /// Normalize raw input into a term
    pub fn new(raw: impl AsRef<str>) -> Self {
        let text = collapse_whitespace(raw.as_ref());
        let key = text.to_lowercase();
        Self { text, key }
    }

    /// The normalized display text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The case-folded matching key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when the input was empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::new(s)
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::new(s)
    }
}
