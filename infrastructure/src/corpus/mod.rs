//! Autocomplete corpus loading
//!
//! The corpus is a line-delimited list of terms. A copy is compiled into the
//! binary; a file given in config or on the command line replaces it.

mod loader;

pub use loader::{BUNDLED_TERMS, CorpusLoadError, CorpusLoader};
