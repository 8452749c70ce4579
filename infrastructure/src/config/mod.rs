//! Configuration file loading for carcino
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./carcino.toml` or `./.carcino.toml`
//! 3. Environment: `CARCINO_<SECTION>__<KEY>`
//! 4. XDG config: `$XDG_CONFIG_HOME/carcino/config.toml`
//!    (fallback `~/.config/carcino/config.toml`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileCorpusConfig, FileLookupConfig, FileMedlinePlusConfig,
    FileOutputConfig, FileSuggestConfig, FileWikipediaConfig, Severity,
};
pub use loader::{ConfigLoadError, ConfigLoader};
