//! Corpus loader

use carcino_domain::{CorpusError, TermCorpus};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Curated term list compiled into the binary
pub const BUNDLED_TERMS: &str = include_str!("../../resources/terms.txt");

/// Errors that can occur while loading the corpus
///
/// Any of these only disables autocomplete; lookups keep working.
#[derive(Error, Debug)]
pub enum CorpusLoadError {
    #[error("Failed to read term corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid term corpus: {0}")]
    Invalid(#[from] CorpusError),
}

/// Loads the [`TermCorpus`] once at startup
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load from `path`, or the bundled list when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<TermCorpus, CorpusLoadError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Self::load_bundled(),
        }
    }

    /// Load a line-delimited term file
    pub fn load_file(path: &Path) -> Result<TermCorpus, CorpusLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| CorpusLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = TermCorpus::parse(&text)?;
        info!("Loaded {} terms from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn load_bundled() -> Result<TermCorpus, CorpusLoadError> {
        let corpus = TermCorpus::parse(BUNDLED_TERMS)?;
        info!("Loaded {} bundled terms", corpus.len());
        Ok(corpus)
    }
}
