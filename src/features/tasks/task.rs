//! Task model and listing options.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TempoError;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority (default)
    #[default]
    Medium,
    /// High priority
    High,
}

impl Priority {
    /// Parse a priority name.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized names.
    pub fn parse(s: &str) -> Result<Self, TempoError> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            _ => Err(TempoError::InvalidInput(format!(
                "Unknown priority '{s}' (expected low, medium, or high)"
            ))),
        }
    }

    /// Database column value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse the database column value, defaulting to medium.
    #[must_use]
    pub fn from_db(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Task title
    pub title: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// When the task was completed (None while open)
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new open task.
    #[must_use]
    pub fn new(title: impl Into<String>, notes: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: None,
            title: title.into(),
            notes: notes.into(),
            priority,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Get creation time in the local timezone.
    #[must_use]
    pub fn created_at_local(&self) -> DateTime<Local> {
        self.created_at.with_timezone(&Local)
    }
}

/// Which tasks to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskFilter {
    /// Every task
    #[default]
    All,
    /// Open tasks only
    Active,
    /// Completed tasks only
    Completed,
}

impl TaskFilter {
    /// Check whether a task passes this filter.
    #[must_use]
    pub const fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TaskSort {
    /// Newest first
    #[default]
    Created,
    /// Highest priority first, newest first within a priority
    Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("high").unwrap(), Priority::High);
        assert_eq!(Priority::parse("H").unwrap(), Priority::High);
        assert_eq!(Priority::parse("med").unwrap(), Priority::Medium);
        assert_eq!(Priority::parse("low").unwrap(), Priority::Low);
        assert!(Priority::parse("urgent").is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_db_round_trip() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_db(p.as_str()), p);
        }
    }

    #[test]
    fn test_new_task() {
        let task = Task::new("write report", "", Priority::High);

        assert!(task.id.is_none());
        assert_eq!(task.title, "write report");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new("t", "", Priority::Medium);

        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Active.matches(&task));
        assert!(!TaskFilter::Completed.matches(&task));

        task.completed = true;
        assert!(TaskFilter::All.matches(&task));
        assert!(!TaskFilter::Active.matches(&task));
        assert!(TaskFilter::Completed.matches(&task));
    }
}
