//! Core data types for domain-hack discovery and availability checking.
//!
//! This module defines all the main data structures used throughout the library,
//! including candidate domains, lookup outcomes, check results, and configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A domain-hack candidate derived from a word and a matching TLD.
///
/// For the word "cathode" and the TLD "de", the candidate is
/// `catho.de`: `prefix` is the word with the TLD suffix stripped.
/// The invariant `prefix + tld == word` always holds.
///
/// Serializes as the full domain string (e.g. `"catho.de"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CandidateDomain {
    /// Second-level label: the word with the TLD suffix removed.
    /// May be empty when the TLD equals the whole word; callers that
    /// need registrable domains must filter those out.
    pub prefix: String,

    /// The matched top-level domain, lowercase, no leading dot.
    pub tld: String,
}

impl CandidateDomain {
    /// Create a new candidate from a prefix and TLD.
    pub fn new(prefix: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tld: tld.into(),
        }
    }

    /// The full domain string, e.g. `"catho.de"`.
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.prefix, self.tld)
    }

    /// The word the candidate was derived from, e.g. `"cathode"`.
    pub fn word(&self) -> String {
        format!("{}{}", self.prefix, self.tld)
    }

    /// Whether the candidate has an empty label before the dot
    /// (the TLD matched the entire word). Such domains are not registrable.
    pub fn is_degenerate(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl std::fmt::Display for CandidateDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.prefix, self.tld)
    }
}

impl From<CandidateDomain> for String {
    fn from(candidate: CandidateDomain) -> Self {
        candidate.fqdn()
    }
}

impl TryFrom<String> for CandidateDomain {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.rsplit_once('.') {
            Some((prefix, tld)) if !tld.is_empty() => Ok(Self::new(prefix, tld)),
            _ => Err(format!("'{}' is not a <prefix>.<tld> domain", value)),
        }
    }
}

/// Raw outcome of one invocation of the lookup capability.
///
/// The checking engine never sees protocol errors as `Err` values; every
/// way a lookup can end is represented here and mapped to a [`LookupStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The lookup completed and produced response text to classify.
    Response(String),

    /// The external lookup process failed (non-zero exit, or it could
    /// not be spawned at all).
    ProcessFailed,

    /// The lookup did not complete within its timeout.
    TimedOut,
}

/// Registration status of one checked candidate.
///
/// Exactly one value is produced per candidate. Failures are statuses,
/// not errors; a failed lookup never aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// The registry reported the domain as registered or not allowed.
    NotAvailable,

    /// The registry reported the domain as free to register.
    Available,

    /// The registry refused the query because a rate limit was exceeded.
    Throttled,

    /// The response text matched no known marker.
    Unknown,

    /// The lookup process itself failed.
    Error,

    /// The lookup did not return within its timeout.
    Timeout,
}

impl LookupStatus {
    /// Whether this status is worth a second look when hunting for
    /// registrable hacks: `available` definitely, `unknown` maybe.
    pub fn is_interesting(&self) -> bool {
        matches!(self, LookupStatus::Available | LookupStatus::Unknown)
    }
}

impl std::fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupStatus::NotAvailable => write!(f, "not available"),
            LookupStatus::Available => write!(f, "available"),
            LookupStatus::Throttled => write!(f, "throttled"),
            LookupStatus::Unknown => write!(f, "unknown"),
            LookupStatus::Error => write!(f, "error"),
            LookupStatus::Timeout => write!(f, "timeout"),
        }
    }
}

/// Result of checking one candidate domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// The candidate that was checked.
    pub candidate: CandidateDomain,

    /// The classified registration status.
    pub status: LookupStatus,

    /// How long the lookup took to complete.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub check_duration: Option<Duration>,
}

/// Configuration options for candidate generation and checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Minimum length of a word to consider (measured on the whole word).
    /// Default: 4
    pub length_min: usize,

    /// Maximum length of a word to consider.
    /// Default: 5
    pub length_max: usize,

    /// Pause between consecutive lookups. Applied unconditionally after
    /// every candidate, whatever its status.
    /// Default: 2 seconds
    #[serde(skip)] // Don't serialize Duration directly
    pub delay: Duration,

    /// Timeout for each individual lookup. An unresponsive registry must
    /// not stall the whole run, so keep this short.
    /// Default: 1 second
    #[serde(skip)] // Don't serialize Duration directly
    pub lookup_timeout: Duration,
}

impl Default for CheckConfig {
    /// Create a sensible default configuration.
    ///
    /// The defaults match the historical tool behavior: short words only,
    /// a 2 second pause between lookups, and a 1 second lookup timeout.
    fn default() -> Self {
        Self {
            length_min: 4,
            length_max: 5,
            delay: Duration::from_secs(2),
            lookup_timeout: Duration::from_secs(1),
        }
    }
}

impl CheckConfig {
    /// Set the word length bounds.
    pub fn with_length_bounds(mut self, length_min: usize, length_max: usize) -> Self {
        self.length_min = length_min;
        self.length_max = length_max;
        self
    }

    /// Set the pause between lookups.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the per-lookup timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}
