//! Display logic for the domain-hack CLI.
//!
//! This module handles all terminal output: colored result lines, the
//! pretty header, the summary bar, and the generation progress bar.
//! Uses the `console` crate for styling and `indicatif` for the bar.

use console::{pad_str, style, Alignment};
use domain_hack_lib::{CheckConfig, CheckResult, LookupStatus};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// ── Progress bar ─────────────────────────────────────────────────────────────

/// Progress bar for the candidate-generation sweep over the wordlist.
///
/// Draws on stderr so stdout stays clean for results and JSON.
pub fn generation_bar(total: u64) -> ProgressBar {
    ProgressBar::new(total).with_style(
        ProgressStyle::default_bar()
            .template("{wide_bar} {pos}/{len} {percent}%")
            .expect("template error"),
    )
}

// ── Header ───────────────────────────────────────────────────────────────────

/// Print a styled header at the start of a pretty run.
pub fn print_header(candidate_count: usize, config: &CheckConfig) {
    println!(
        "{} {} {}",
        style("domain-hack").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Checking {} domain{}",
            candidate_count,
            if candidate_count == 1 { "" } else { "s" }
        ))
        .dim(),
    );

    println!(
        "{}",
        style(format!(
            "Length: {}-{} | Delay: {:.1}s | Timeout: {}s",
            config.length_min,
            config.length_max,
            config.delay.as_secs_f64(),
            config.lookup_timeout.as_secs(),
        ))
        .dim()
    );
    println!();
}

// ── Single result line ───────────────────────────────────────────────────────

/// Print a single result in the default flat format:
/// `[3/8] catho.de -> not available`.
pub fn print_result(result: &CheckResult, debug: bool, counter: (usize, usize)) {
    let (current, total) = counter;
    println!(
        "{} {} -> {}",
        style(format!("[{}/{}]", current, total)).dim(),
        result.candidate,
        styled_status(result.status),
    );

    if debug {
        if let Some(duration) = result.check_duration {
            println!(
                "  {} checked in {}ms",
                style("└─").dim(),
                duration.as_millis(),
            );
        }
    }
}

/// Print a single result with padded columns for pretty mode.
pub fn print_result_pretty(result: &CheckResult, debug: bool, counter: (usize, usize)) {
    let (current, total) = counter;
    let domain_width = 30;
    let domain = result.candidate.fqdn();
    let padded_domain = pad_str(&domain, domain_width, Alignment::Left, Some(".."));

    println!(
        "  {} {}  {}",
        style(format!("[{}/{}]", current, total)).dim(),
        style(&padded_domain).white(),
        styled_status_upper(result.status),
    );

    if debug {
        if let Some(duration) = result.check_duration {
            println!(
                "    {} checked in {}ms",
                style("└─").dim(),
                duration.as_millis(),
            );
        }
    }
}

/// Status text with the historical color scheme: red for taken, green for
/// available, yellow for unknown; failure statuses stay uncolored.
fn styled_status(status: LookupStatus) -> String {
    match status {
        LookupStatus::NotAvailable => style(status_label(status)).red().to_string(),
        LookupStatus::Available => style(status_label(status)).green().to_string(),
        LookupStatus::Unknown => style(status_label(status)).yellow().to_string(),
        LookupStatus::Throttled | LookupStatus::Error | LookupStatus::Timeout => {
            status_label(status).to_string()
        }
    }
}

/// Upper-case bold variant for pretty mode.
fn styled_status_upper(status: LookupStatus) -> String {
    let label = status_label(status).to_uppercase();
    match status {
        LookupStatus::NotAvailable => style(label).red().bold().to_string(),
        LookupStatus::Available => style(label).green().bold().to_string(),
        LookupStatus::Unknown => style(label).yellow().to_string(),
        LookupStatus::Throttled | LookupStatus::Error | LookupStatus::Timeout => {
            style(label).dim().to_string()
        }
    }
}

/// Plain-text label for a status.
fn status_label(status: LookupStatus) -> &'static str {
    match status {
        LookupStatus::NotAvailable => "not available",
        LookupStatus::Available => "available",
        LookupStatus::Throttled => "throttled",
        LookupStatus::Unknown => "unknown",
        LookupStatus::Error => "error",
        LookupStatus::Timeout => "timeout",
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// Per-status counts for the summary bar: (available, not available,
/// unknown, failed).
pub(crate) fn summarize(results: &[CheckResult]) -> (usize, usize, usize, usize) {
    let count =
        |status: LookupStatus| results.iter().filter(|r| r.status == status).count();

    let failed = count(LookupStatus::Throttled)
        + count(LookupStatus::Error)
        + count(LookupStatus::Timeout);

    (
        count(LookupStatus::Available),
        count(LookupStatus::NotAvailable),
        count(LookupStatus::Unknown),
        failed,
    )
}

/// Print the final summary bar with colored counts.
pub fn print_summary(results: &[CheckResult], duration: Duration) {
    let (available, taken, unknown, failed) = summarize(results);
    let total = results.len();

    println!(
        "  {}",
        style("────────────────────────────────────────────────────").dim()
    );
    println!(
        "  {} domain{} in {:.1}s  {}  {}  {}  {}  {}  {}",
        style(total).bold(),
        if total == 1 { "" } else { "s" },
        duration.as_secs_f64(),
        style("|").dim(),
        style(format!("{} available", available)).green(),
        style("|").dim(),
        style(format!("{} taken", taken)).red(),
        style("|").dim(),
        style(format!("{} unknown", unknown)).yellow(),
    );

    if failed > 0 {
        println!(
            "  {}",
            style(format!(
                "{} lookup{} failed (throttled, error, or timeout)",
                failed,
                if failed == 1 { "" } else { "s" }
            ))
            .dim()
        );
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
