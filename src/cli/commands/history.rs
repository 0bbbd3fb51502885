//! History and report command implementations.

use crate::cli::args::OutputFormat;
use crate::error::TempoError;
use crate::features::timer::{ReportPeriod, SessionStorage, TimerReport};
use crate::output::{format_report_pretty, format_sessions, to_json};

/// Show recent sessions.
///
/// # Errors
///
/// Returns an error if the session history cannot be read.
pub fn history(limit: usize, format: OutputFormat) -> Result<String, TempoError> {
    let storage = SessionStorage::new()?;
    let sessions = storage.get_recent(limit)?;

    format_sessions(&sessions, format)
}

/// Generate a work-time report.
///
/// # Errors
///
/// Returns an error if the session history cannot be read.
pub fn report(period: &str, format: OutputFormat) -> Result<String, TempoError> {
    let storage = SessionStorage::new()?;
    let report = TimerReport::generate(&storage, ReportPeriod::parse(period))?;

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(format_report_pretty(&report)),
    }
}
