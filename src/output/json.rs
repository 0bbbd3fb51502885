//! JSON output formatting for tempo.

use serde::Serialize;
use serde_json::json;

use crate::error::TempoError;
use crate::features::tasks::Task;
use crate::features::timer::SessionRecord;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, TempoError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format session history as JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[SessionRecord]) -> Result<String, TempoError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TempoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::Priority;

    #[test]
    fn test_format_tasks_json() {
        let tasks = vec![Task::new("write tests", "", Priority::High)];
        let json = format_tasks_json(&tasks, "All").unwrap();

        assert!(json.contains("\"list\": \"All\""));
        assert!(json.contains("\"count\": 1"));
        assert!(json.contains("write tests"));
    }

    #[test]
    fn test_format_empty_tasks_json() {
        let json = format_tasks_json(&[], "All").unwrap();
        assert!(json.contains("\"count\": 0"));
    }
}
