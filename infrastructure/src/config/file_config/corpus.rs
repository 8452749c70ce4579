//! Corpus configuration from TOML (`[corpus]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[corpus]` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// Newline-delimited term list; the bundled list is used when unset
    pub path: Option<PathBuf>,
}
