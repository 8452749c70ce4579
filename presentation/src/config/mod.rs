//! Presentation-level configuration
//!
//! Configuration for output formatting and progress display.

use carcino_domain::OutputFormat;

/// How results are shown to the user
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Text (attribution + prose) or JSON
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a lookup runs
    pub show_progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl DisplayConfig {
    /// Progress output would corrupt machine-readable output
    pub fn wants_spinner(&self) -> bool {
        self.show_progress && self.format == OutputFormat::Text
    }

    /// Turn ANSI colors off process-wide when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
