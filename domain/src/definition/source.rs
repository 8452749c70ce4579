//! Source value objects

use serde::{Deserialize, Serialize};

/// An external authority capable of answering a term lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceName {
    /// MedlinePlus Connect (U.S. National Library of Medicine)
    MedlinePlus,
    /// Wikipedia page summaries
    Wikipedia,
}

impl SourceName {
    /// Short identifier used in logs and config
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceName::MedlinePlus => "medlineplus",
            SourceName::Wikipedia => "wikipedia",
        }
    }

    /// Human-readable attribution shown next to a definition
    pub fn attribution(&self) -> &'static str {
        match self {
            SourceName::MedlinePlus => "MedlinePlus (U.S. National Library of Medicine)",
            SourceName::Wikipedia => "Wikipedia",
        }
    }
}

impl std::fmt::Display for SourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceName::MedlinePlus => write!(f, "MedlinePlus"),
            SourceName::Wikipedia => write!(f, "Wikipedia"),
        }
    }
}

/// The raw entry a source matched for a term
///
/// `body` is the payload as delivered (often HTML); cleaning happens later
/// in the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub body: String,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl SourceEntry {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            url: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
