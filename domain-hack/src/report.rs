//! Append-only availability report log.
//!
//! Each run appends a blank line and a timestamp header, then one line per
//! noteworthy result. Failure statuses (throttled, error, timeout) are
//! shown on the terminal but never logged; a later run is expected to
//! retry those candidates.

use chrono::Local;
use domain_hack_lib::{CheckResult, LookupStatus};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Writer for the availability report file.
pub struct ReportWriter {
    file: File,
}

impl ReportWriter {
    /// Open (or create) the report file in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write the per-run header: a blank separator line and a timestamp.
    pub fn write_run_header(&mut self) -> std::io::Result<()> {
        writeln!(self.file)?;
        writeln!(self.file, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }

    /// Append one result. Statuses that aren't logged are skipped quietly.
    pub fn record(&mut self, result: &CheckResult) -> std::io::Result<()> {
        if let Some(line) = report_line(result) {
            writeln!(self.file, "{}", line)?;
        }
        Ok(())
    }
}

/// The report line for a result, or None when the status isn't logged.
pub(crate) fn report_line(result: &CheckResult) -> Option<String> {
    let domain = result.candidate.fqdn();
    match result.status {
        LookupStatus::NotAvailable => Some(format!("{} is not available", domain)),
        LookupStatus::Available => Some(format!("{} is available", domain)),
        LookupStatus::Unknown => Some(format!("{} might be available", domain)),
        LookupStatus::Throttled | LookupStatus::Error | LookupStatus::Timeout => None,
    }
}
