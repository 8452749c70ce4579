//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod autocomplete;
pub mod resolve_definition;
