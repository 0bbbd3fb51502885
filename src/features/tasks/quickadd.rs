//! Quick-add task parser.
//!
//! Parses strings like "write report !high // first draft tonight"
//! into a title, priority, and notes.
//!
//! # Supported Patterns
//!
//! - Priority: `!high`, `!medium`, `!low` (also `!!!`, `!!`, `!`)
//! - Notes: everything after `//`

use once_cell::sync::Lazy;
use regex::Regex;

use super::task::Priority;

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*!(high|medium|med|low|!!|!)?\s*")
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static NOTES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*//\s*(.+)$").unwrap_or_else(|e| panic!("Invalid notes regex: {e}")));

/// Result of parsing a quick-add string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTask {
    /// The task title (text left after extracting all patterns).
    pub title: String,
    /// Notes (text after //).
    pub notes: Option<String>,
    /// Priority, if a marker was present.
    pub priority: Option<Priority>,
}

/// Parse a quick-add string.
#[must_use]
pub fn parse_quick_add(input: &str) -> ParsedTask {
    let mut remaining = input.trim().to_string();

    // Notes come last in the input, so strip them first.
    let notes = NOTES_PATTERN
        .captures(&remaining)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    if notes.is_some() {
        remaining = NOTES_PATTERN.replace(&remaining, "").to_string();
    }

    let mut priority = None;
    if let Some(caps) = PRIORITY_PATTERN.captures(&remaining) {
        priority = Some(match caps.get(1).map_or("", |m| m.as_str()) {
            "high" | "!!" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        });
        remaining = PRIORITY_PATTERN.replace(&remaining, " ").to_string();
    }

    ParsedTask {
        title: remaining.trim().to_string(),
        notes: notes.filter(|n| !n.is_empty()),
        priority,
    }
}
