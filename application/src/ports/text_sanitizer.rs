//! Text sanitizer port
//!
//! Converts raw source payloads (HTML fragments, entity-encoded text) into
//! plain prose.

/// Turns markup into clean, single-spaced plain text
///
/// Implementations must be total (never fail, degrade to best-effort text
/// extraction) and idempotent: `clean(&clean(x)) == clean(x)`.
pub trait TextSanitizer: Send + Sync {
    fn clean(&self, raw: &str) -> String;
}
