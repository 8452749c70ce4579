//! Interactive lookup mode

mod repl;

pub use repl::{LookupRepl, ReplInput};
