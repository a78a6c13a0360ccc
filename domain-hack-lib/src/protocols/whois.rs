//! WHOIS-backed implementation of the lookup capability.
//!
//! This client uses the system's `whois` command-line tool to query domain
//! registration data. WHOIS responses are unstructured free text; the
//! client returns them verbatim for the checker to classify.

use crate::protocols::Lookup;
use crate::types::LookupOutcome;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Lookup client backed by the system `whois` command.
///
/// Every invocation runs under a hard per-call timeout, and the child
/// process is killed if the call is abandoned, so an unresponsive registry
/// can neither stall the run nor leave a hung `whois` behind.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    /// Timeout for WHOIS requests
    timeout: Duration,
}

impl WhoisClient {
    /// Create a new WHOIS client with the default 1 second timeout.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(1),
        }
    }

    /// Create a new WHOIS client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The configured per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Lookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> LookupOutcome {
        let mut command = Command::new("whois");
        // kill_on_drop: if the timeout fires (or the run is interrupted),
        // the in-flight child must not outlive us.
        command.arg(domain).kill_on_drop(true);

        match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) if output.status.success() => {
                LookupOutcome::Response(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(Ok(output)) => {
                tracing::debug!(
                    domain = %domain,
                    code = ?output.status.code(),
                    "whois exited with failure status"
                );
                LookupOutcome::ProcessFailed
            }
            Ok(Err(err)) => {
                tracing::debug!(
                    domain = %domain,
                    error = %err,
                    "failed to execute whois command; make sure 'whois' is installed"
                );
                LookupOutcome::ProcessFailed
            }
            Err(_) => LookupOutcome::TimedOut,
        }
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if the system has a working whois command.
///
/// Useful for verifying WHOIS functionality is available before starting
/// a long run.
pub async fn is_whois_available() -> bool {
    match Command::new("whois").arg("--version").output().await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
