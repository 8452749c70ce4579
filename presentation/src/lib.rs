//! Presentation layer for carcino
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive lookup loop.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::DisplayConfig;
pub use interactive::{LookupRepl, ReplInput};
pub use output::console::{ConsoleFormatter, EMPTY_INPUT_MESSAGE};
pub use progress::reporter::{SimpleProgress, SpinnerProgress};
