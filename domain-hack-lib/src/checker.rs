//! Sequential, rate-limited availability checking.
//!
//! This module provides the [`HackChecker`] that drives candidates through
//! the lookup capability one at a time, classifies each raw response into a
//! [`LookupStatus`], and paces itself with a constant delay between
//! lookups. Checking is strictly serialized: at most one lookup is in
//! flight at any moment.

use crate::protocols::{Lookup, WhoisClient};
use crate::types::{CandidateDomain, CheckConfig, CheckResult, LookupOutcome, LookupStatus};
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::sleep;

/// Classify raw lookup response text into a status.
///
/// Substring matches are case-sensitive and evaluated in a fixed
/// precedence order, first match wins. The order matters: registry
/// boilerplate can contain both an `"active"` marker and an `"AVAILABLE"`
/// marker (and `"NOT AVAILABLE"` itself contains `"AVAILABLE"`), so the
/// negative markers must be checked first. Do not reorder.
pub fn classify_response(response: &str) -> LookupStatus {
    if response.contains("NOT AVAILABLE")
        || response.contains("NOT ALLOWED")
        || response.contains("active")
    {
        LookupStatus::NotAvailable
    } else if response.contains("NOT FOUND")
        || response.contains("AVAILABLE")
        || response.contains("is free")
    {
        LookupStatus::Available
    } else if response.contains("exceeded") {
        LookupStatus::Throttled
    } else {
        LookupStatus::Unknown
    }
}

/// Map a raw lookup outcome to its status.
///
/// Only response text is classified by content; process failure and
/// timeout map directly to their statuses.
pub fn classify_outcome(outcome: &LookupOutcome) -> LookupStatus {
    match outcome {
        LookupOutcome::Response(text) => classify_response(text),
        LookupOutcome::ProcessFailed => LookupStatus::Error,
        LookupOutcome::TimedOut => LookupStatus::Timeout,
    }
}

/// Sequential availability checker for domain-hack candidates.
///
/// # Example
///
/// ```rust,no_run
/// use domain_hack_lib::{CandidateDomain, HackChecker};
///
/// #[tokio::main]
/// async fn main() {
///     let checker = HackChecker::new();
///     let candidates = vec![CandidateDomain::new("catho", "de")];
///     let results = checker.check_candidates(&candidates).await;
///     for result in results {
///         println!("{} -> {}", result.candidate, result.status);
///     }
/// }
/// ```
pub struct HackChecker {
    /// Configuration settings for this checker instance
    config: CheckConfig,
    /// The lookup capability; a WHOIS client by default, a stub in tests
    lookup: Arc<dyn Lookup>,
}

impl HackChecker {
    /// Create a new checker with default configuration and the system
    /// WHOIS client as lookup capability.
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a new checker with custom configuration.
    pub fn with_config(config: CheckConfig) -> Self {
        let lookup: Arc<dyn Lookup> = Arc::new(WhoisClient::with_timeout(config.lookup_timeout));
        Self { config, lookup }
    }

    /// Create a new checker with a custom lookup capability.
    ///
    /// This is the seam for testing the classification and pacing logic
    /// against a deterministic stub instead of a live registry.
    pub fn with_lookup(config: CheckConfig, lookup: Arc<dyn Lookup>) -> Self {
        Self { config, lookup }
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check a single candidate: one lookup, one classification.
    ///
    /// Never fails: lookup failures surface as the result's status.
    pub async fn check_candidate(&self, candidate: &CandidateDomain) -> CheckResult {
        let domain = candidate.fqdn();
        let started = Instant::now();

        let outcome = self.lookup.lookup(&domain).await;
        let status = classify_outcome(&outcome);
        let check_duration = started.elapsed();

        tracing::debug!(
            domain = %domain,
            status = %status,
            duration_ms = %check_duration.as_millis(),
            "candidate checked"
        );

        CheckResult {
            candidate: candidate.clone(),
            status,
            check_duration: Some(check_duration),
        }
    }

    /// Check candidates strictly in input order, one at a time, and
    /// collect all results.
    ///
    /// After every candidate, including the last and regardless of its
    /// status, the checker sleeps for the configured delay. No smart
    /// backoff, no skipping: constant pacing is the contract with the
    /// rate-limited registries. A `throttled`, `error`, or `timeout`
    /// result never aborts the run; it is recorded and checking moves on.
    pub async fn check_candidates(&self, candidates: &[CandidateDomain]) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let result = self.check_candidate(candidate).await;
            results.push(result);
            sleep(self.config.delay).await;
        }

        results
    }

    /// Check candidates and yield results as a stream, in input order.
    ///
    /// The same serialized engine as [`check_candidates`], but each result
    /// is yielded the moment its lookup classifies; the constant pacing
    /// sleep sits between candidates. Dropping the stream between items
    /// abandons the rest of the run cleanly: results already yielded
    /// remain valid, and no lookup is left in flight (per-call timeouts
    /// bound them).
    ///
    /// [`check_candidates`]: HackChecker::check_candidates
    pub fn check_candidates_stream<'a>(
        &'a self,
        candidates: &'a [CandidateDomain],
    ) -> Pin<Box<dyn Stream<Item = CheckResult> + Send + 'a>> {
        let delay = self.config.delay;
        let stream =
            futures::stream::iter(candidates.iter().enumerate()).then(move |(index, candidate)| {
                async move {
                    if index > 0 {
                        sleep(delay).await;
                    }
                    self.check_candidate(candidate).await
                }
            });

        Box::pin(stream)
    }
}

impl Default for HackChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Stub lookup returning canned outcomes per domain.
    struct ScriptedLookup {
        outcomes: HashMap<String, LookupOutcome>,
    }

    impl ScriptedLookup {
        fn new(entries: &[(&str, LookupOutcome)]) -> Arc<Self> {
            Arc::new(Self {
                outcomes: entries
                    .iter()
                    .map(|(domain, outcome)| (domain.to_string(), outcome.clone()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl Lookup for ScriptedLookup {
        async fn lookup(&self, domain: &str) -> LookupOutcome {
            self.outcomes
                .get(domain)
                .cloned()
                .unwrap_or(LookupOutcome::ProcessFailed)
        }
    }

    fn fast_config() -> CheckConfig {
        CheckConfig::default().with_delay(Duration::from_millis(0))
    }

    #[test]
    fn test_classify_not_available_markers() {
        assert_eq!(
            classify_response("Status: NOT AVAILABLE"),
            LookupStatus::NotAvailable
        );
        assert_eq!(
            classify_response("Registration NOT ALLOWED"),
            LookupStatus::NotAvailable
        );
        assert_eq!(classify_response("status: active"), LookupStatus::NotAvailable);
    }

    #[test]
    fn test_classify_available_markers() {
        assert_eq!(classify_response("NOT FOUND"), LookupStatus::Available);
        assert_eq!(
            classify_response("Status: AVAILABLE"),
            LookupStatus::Available
        );
        assert_eq!(
            classify_response("the domain is free"),
            LookupStatus::Available
        );
    }

    #[test]
    fn test_classify_precedence_negative_markers_win() {
        // A response carrying both an "active" marker and an "AVAILABLE"
        // marker must classify as not available.
        let response = "Domain status: active\nOther services: AVAILABLE";
        assert_eq!(classify_response(response), LookupStatus::NotAvailable);

        // "NOT AVAILABLE" itself contains "AVAILABLE"; precedence keeps
        // it on the negative side.
        assert_eq!(
            classify_response("NOT AVAILABLE"),
            LookupStatus::NotAvailable
        );
    }

    #[test]
    fn test_classify_throttled_only_after_availability_markers() {
        assert_eq!(
            classify_response("query quota exceeded"),
            LookupStatus::Throttled
        );
        // "exceeded" alongside an availability marker: the earlier rule wins
        assert_eq!(
            classify_response("NOT FOUND; daily quota exceeded"),
            LookupStatus::Available
        );
    }

    #[test]
    fn test_classify_matching_is_case_sensitive() {
        // Lowercase "not available" matches none of the uppercase markers;
        // it falls through to unknown.
        assert_eq!(classify_response("not available"), LookupStatus::Unknown);
        assert_eq!(classify_response(""), LookupStatus::Unknown);
        assert_eq!(
            classify_response("some unrecognized registry text"),
            LookupStatus::Unknown
        );
    }

    #[test]
    fn test_classify_outcome_failures() {
        assert_eq!(
            classify_outcome(&LookupOutcome::ProcessFailed),
            LookupStatus::Error
        );
        assert_eq!(
            classify_outcome(&LookupOutcome::TimedOut),
            LookupStatus::Timeout
        );
    }

    #[tokio::test]
    async fn test_results_preserve_input_order() {
        let lookup = ScriptedLookup::new(&[
            ("ab.be", LookupOutcome::Response("active".into())),
            ("ado.be", LookupOutcome::Response("NOT ALLOWED".into())),
            ("foredescri.be", LookupOutcome::Response("is free".into())),
        ]);
        let checker = HackChecker::with_lookup(fast_config(), lookup);

        let candidates = vec![
            CandidateDomain::new("ab", "be"),
            CandidateDomain::new("ado", "be"),
            CandidateDomain::new("foredescri", "be"),
        ];
        let results = checker.check_candidates(&candidates).await;

        assert_eq!(results.len(), 3);
        let summary: Vec<(String, LookupStatus)> = results
            .iter()
            .map(|r| (r.candidate.fqdn(), r.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("ab.be".to_string(), LookupStatus::NotAvailable),
                ("ado.be".to_string(), LookupStatus::NotAvailable),
                ("foredescri.be".to_string(), LookupStatus::Available),
            ]
        );
    }

    #[tokio::test]
    async fn test_failures_never_abort_the_run() {
        let lookup = ScriptedLookup::new(&[
            ("aa.de", LookupOutcome::TimedOut),
            ("bb.de", LookupOutcome::Response("quota exceeded".into())),
            ("cc.de", LookupOutcome::ProcessFailed),
            ("dd.de", LookupOutcome::Response("AVAILABLE".into())),
        ]);
        let checker = HackChecker::with_lookup(fast_config(), lookup);

        let candidates: Vec<CandidateDomain> = ["aa", "bb", "cc", "dd"]
            .iter()
            .map(|prefix| CandidateDomain::new(*prefix, "de"))
            .collect();
        let results = checker.check_candidates(&candidates).await;

        let statuses: Vec<LookupStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                LookupStatus::Timeout,
                LookupStatus::Throttled,
                LookupStatus::Error,
                LookupStatus::Available,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_constant_delay_after_every_candidate_including_last() {
        let lookup = ScriptedLookup::new(&[
            ("aa.de", LookupOutcome::Response("active".into())),
            ("bb.de", LookupOutcome::TimedOut),
            ("cc.de", LookupOutcome::Response("AVAILABLE".into())),
        ]);
        let config = CheckConfig::default().with_delay(Duration::from_secs(5));
        let checker = HackChecker::with_lookup(config, lookup);

        let candidates: Vec<CandidateDomain> = ["aa", "bb", "cc"]
            .iter()
            .map(|prefix| CandidateDomain::new(*prefix, "de"))
            .collect();

        let started = tokio::time::Instant::now();
        let results = checker.check_candidates(&candidates).await;
        let elapsed = started.elapsed();

        assert_eq!(results.len(), 3);
        // One full delay per candidate, the last one and the failed one
        // included: 3 × 5s. Anything less means a sleep was skipped.
        assert!(
            elapsed >= Duration::from_secs(15),
            "expected 3 full delays, elapsed only {:?}",
            elapsed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_paces_between_candidates() {
        let lookup = ScriptedLookup::new(&[
            ("aa.de", LookupOutcome::Response("active".into())),
            ("bb.de", LookupOutcome::Response("active".into())),
        ]);
        let config = CheckConfig::default().with_delay(Duration::from_secs(3));
        let checker = HackChecker::with_lookup(config, lookup);

        let candidates = vec![
            CandidateDomain::new("aa", "de"),
            CandidateDomain::new("bb", "de"),
        ];

        let started = tokio::time::Instant::now();
        let mut stream = checker.check_candidates_stream(&candidates);

        // First result is yielded without any leading delay
        let first = stream.next().await.unwrap();
        assert_eq!(first.candidate.fqdn(), "aa.de");
        assert!(started.elapsed() < Duration::from_secs(1));

        // The second is paced a full delay later
        let second = stream.next().await.unwrap();
        assert_eq!(second.candidate.fqdn(), "bb.de");
        assert!(started.elapsed() >= Duration::from_secs(3));

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_stream_order_matches_collected_order() {
        let lookup = ScriptedLookup::new(&[
            ("aa.de", LookupOutcome::Response("NOT FOUND".into())),
            ("bb.de", LookupOutcome::Response("active".into())),
            ("cc.de", LookupOutcome::ProcessFailed),
        ]);
        let checker = HackChecker::with_lookup(fast_config(), lookup.clone());

        let candidates: Vec<CandidateDomain> = ["aa", "bb", "cc"]
            .iter()
            .map(|prefix| CandidateDomain::new(*prefix, "de"))
            .collect();

        let streamed: Vec<CheckResult> =
            checker.check_candidates_stream(&candidates).collect().await;
        let collected = checker.check_candidates(&candidates).await;

        let streamed_statuses: Vec<LookupStatus> = streamed.iter().map(|r| r.status).collect();
        let collected_statuses: Vec<LookupStatus> = collected.iter().map(|r| r.status).collect();
        assert_eq!(streamed_statuses, collected_statuses);
    }

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let lookup = ScriptedLookup::new(&[]);
        let checker = HackChecker::with_lookup(fast_config(), lookup);
        let results = checker.check_candidates(&[]).await;
        assert!(results.is_empty());
    }
}
