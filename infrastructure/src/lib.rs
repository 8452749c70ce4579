//! Infrastructure layer for carcino
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP definition sources, the markup
//! sanitizer, corpus loading and configuration file loading.

pub mod config;
pub mod corpus;
pub mod sanitize;
pub mod sources;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoadError, ConfigLoader, FileConfig, FileOutputConfig};
pub use corpus::{CorpusLoadError, CorpusLoader};
pub use sanitize::HtmlSanitizer;
pub use sources::{
    HttpOptions, MedlinePlusClient, SourceSetupError, WikipediaClient, default_sources,
};
