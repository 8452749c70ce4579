//! Application layer for carcino
//!
//! This crate contains the resolution pipeline, autocomplete, the lookup
//! executor and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod config;
pub mod executor;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LookupConfig;
pub use executor::{LookupCompletion, LookupExecutor, LookupTicket};
pub use ports::{
    definition_source::{DefinitionSource, SourceError},
    progress::{NoProgress, ResolutionProgress},
    text_sanitizer::TextSanitizer,
};
pub use use_cases::autocomplete::Autocomplete;
pub use use_cases::resolve_definition::ResolutionPipeline;
