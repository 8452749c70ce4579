//! Definitions returned by the sources.
//!
//! - [`source::SourceName`]: which authority answered
//! - [`source::SourceEntry`]: the raw payload a source matched
//! - [`result::DefinitionResult`]: the outcome of one lookup or resolution

pub mod result;
pub mod source;
