//! Domain layer for carcino
//!
//! This crate contains the core value objects of the term finder.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Term
//!
//! A [`Term`] is the normalized form of what the user typed. It is sent to the
//! definition sources as-is and compared case-insensitively.
//!
//! ## Definition
//!
//! A [`DefinitionResult`] is what one source (or the whole resolution) yields
//! for a term: either a found definition attributed to exactly one
//! [`SourceName`], or a not-found outcome with no body.
//!
//! ## Corpus
//!
//! The [`TermCorpus`] is the curated list behind autocomplete. It produces
//! [`SuggestionSet`]s and plays no part in definition lookup.

pub mod config;
pub mod core;
pub mod corpus;
pub mod definition;
pub mod resolution;
pub mod term;

// Re-export commonly used types
pub use config::OutputFormat;
pub use corpus::{CorpusError, SuggestionSet, TermCorpus};
pub use definition::{
    result::DefinitionResult,
    source::{SourceEntry, SourceName},
};
pub use resolution::ResolutionState;
pub use term::Term;
