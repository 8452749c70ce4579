//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod definition_source;
pub mod progress;
pub mod text_sanitizer;
