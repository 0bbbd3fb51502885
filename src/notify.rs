//! Desktop notifications for phase transitions.
//!
//! Notification delivery is best-effort: a missing notification daemon
//! should never take the timer down, so failures are reported to the
//! caller and ignored at the call site.

use notify_rust::Notification;

use crate::error::TempoError;
use crate::features::timer::{Phase, PhaseChange};

/// Show a desktop notification for a finished phase.
///
/// # Errors
///
/// Returns an error if the notification cannot be shown.
pub fn phase_ended(change: &PhaseChange) -> Result<(), TempoError> {
    let (summary, body) = match change.to {
        Phase::Work => (
            "Back to work".to_string(),
            "Break's over. Time to focus.".to_string(),
        ),
        Phase::ShortBreak => (
            "Short break".to_string(),
            format!(
                "Work session {} done. Take a few minutes.",
                change.completed_sessions
            ),
        ),
        Phase::LongBreak => (
            "Long break".to_string(),
            format!(
                "{} sessions done. You've earned a proper rest.",
                change.completed_sessions
            ),
        ),
    };

    Notification::new()
        .summary(&summary)
        .body(&body)
        .appname("tempo")
        .show()
        .map_err(|e| TempoError::Config(format!("Failed to show notification: {e}")))?;

    Ok(())
}
