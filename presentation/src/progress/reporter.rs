//! Progress reporting for definition lookups

use carcino_application::ResolutionProgress;
use carcino_domain::{ResolutionState, Term};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr while sources are queried
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Spinner that never draws (tests, non-terminal output)
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(Self::spinner_style());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Current spinner text
    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    pub(crate) fn searching_message(term: &Term) -> String {
        format!("Searching for '{}'...", term)
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionProgress for SpinnerProgress {
    fn on_state(&self, term: &Term, state: &ResolutionState) {
        match state {
            ResolutionState::Idle => {}
            ResolutionState::Querying { source, attempt } => {
                if *attempt == 1 {
                    self.bar.enable_steady_tick(Duration::from_millis(100));
                    self.bar.set_message(Self::searching_message(term));
                } else {
                    self.bar.set_message(format!(
                        "{} {}",
                        Self::searching_message(term),
                        format!("(trying {})", source.attribution()).dimmed()
                    ));
                }
            }
            ResolutionState::Cleaning { .. } => {}
            ResolutionState::Done { .. } => self.bar.finish_and_clear(),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ResolutionProgress for SimpleProgress {
    fn on_state(&self, term: &Term, state: &ResolutionState) {
        if let ResolutionState::Querying { source, attempt } = state {
            if *attempt == 1 {
                eprintln!("{} {}", "->".cyan(), SpinnerProgress::searching_message(term));
            } else {
                eprintln!("  {} trying {}", "->".cyan(), source.attribution());
            }
        }
    }
}
