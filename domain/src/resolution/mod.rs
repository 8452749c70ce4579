//! Resolution state machine

use crate::definition::source::SourceName;

/// Where a resolution request currently is
///
/// ```text
/// Idle -> Querying(primary) -> Cleaning -> Done { found: true }
///                           -> Querying(fallback) -> Cleaning -> Done { found: true }
///                                                 -> Done { found: false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Idle,
    /// Waiting on a source; `attempt` is 1 for the primary source
    Querying { source: SourceName, attempt: usize },
    /// A source matched and its payload is being sanitized
    Cleaning { source: SourceName },
    Done { found: bool },
}

impl ResolutionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionState::Done { .. })
    }
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionState::Idle => write!(f, "idle"),
            ResolutionState::Querying { source, .. } => write!(f, "querying {}", source),
            ResolutionState::Cleaning { source } => write!(f, "cleaning {} payload", source),
            ResolutionState::Done { found: true } => write!(f, "done"),
            ResolutionState::Done { found: false } => write!(f, "done (not found)"),
        }
    }
}
