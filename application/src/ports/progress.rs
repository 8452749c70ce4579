//! Progress notification port
//!
//! Defines the interface for reporting resolution progress.

use carcino_domain::{ResolutionState, Term};

/// Callback for state changes during a resolution
///
/// Implementations live in the presentation layer (spinners, status bars).
/// Called from whatever task runs the resolution.
pub trait ResolutionProgress: Send + Sync {
    fn on_state(&self, term: &Term, state: &ResolutionState);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolutionProgress for NoProgress {
    fn on_state(&self, _term: &Term, _state: &ResolutionState) {}
}
