//! Lookup capability for domain availability checking.
//!
//! The checking engine depends only on the narrow [`Lookup`] trait:
//! given a domain name, return status-relevant response text or a failure
//! signal within a bounded time. This keeps the classification and pacing
//! logic testable against deterministic stubs instead of a live registry.

/// WHOIS protocol implementation
pub mod whois;

use crate::types::LookupOutcome;
use async_trait::async_trait;

/// Abstract registration lookup.
///
/// Implementations must be bounded in time: an unresponsive backend is
/// reported as [`LookupOutcome::TimedOut`], never awaited indefinitely.
/// The trait is infallible: every way a lookup can end is a
/// [`LookupOutcome`] variant.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Look up one domain name and return the raw outcome.
    async fn lookup(&self, domain: &str) -> LookupOutcome;
}

// Re-export commonly used types
pub use whois::WhoisClient;
