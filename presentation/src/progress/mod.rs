//! Progress display while a lookup runs

pub mod reporter;
