//! Task command implementations.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::TempoError;
use crate::features::tasks::{parse_quick_add, Priority, Task, TaskFilter, TaskSort, TaskStore};
use crate::output::{format_task, format_tasks, to_json};

/// Add a task.
///
/// Quick-add markers in the text ('!high', '// notes') are extracted;
/// explicit flags win over markers.
///
/// # Errors
///
/// Returns an error if the text is empty or the store fails.
pub fn task_add(
    text: &str,
    notes: Option<String>,
    priority: Option<String>,
    format: OutputFormat,
) -> Result<String, TempoError> {
    let parsed = parse_quick_add(text);

    if parsed.title.is_empty() {
        return Err(TempoError::InvalidInput(
            "Task title cannot be empty".to_string(),
        ));
    }

    let priority = match priority {
        Some(p) => Priority::parse(&p)?,
        None => parsed.priority.unwrap_or_default(),
    };
    let notes = notes.or(parsed.notes).unwrap_or_default();

    let mut task = Task::new(parsed.title, notes, priority);

    let store = TaskStore::new()?;
    store.add(&mut task)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => {
            let id = task.id.unwrap_or_default();
            Ok(format!(
                "{} Added task {}: {}",
                "+".green().bold(),
                id,
                task.title.bold()
            ))
        }
    }
}

/// List tasks.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn task_list(
    filter: TaskFilter,
    sort: TaskSort,
    format: OutputFormat,
) -> Result<String, TempoError> {
    let store = TaskStore::new()?;
    let tasks = store.list(filter, sort)?;

    let title = match filter {
        TaskFilter::All => "Tasks",
        TaskFilter::Active => "Active Tasks",
        TaskFilter::Completed => "Completed Tasks",
    };

    format_tasks(&tasks, title, format)
}

/// Mark a task as completed.
///
/// # Errors
///
/// Returns `NotFound` if no task has this ID.
pub fn task_done(id: i64, format: OutputFormat) -> Result<String, TempoError> {
    let store = TaskStore::new()?;
    let task = store.set_completed(id, true)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("{} Completed: {}", "✓".green(), task.title)),
    }
}

/// Reopen a completed task.
///
/// # Errors
///
/// Returns `NotFound` if no task has this ID.
pub fn task_reopen(id: i64, format: OutputFormat) -> Result<String, TempoError> {
    let store = TaskStore::new()?;
    let task = store.set_completed(id, false)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("{} Reopened: {}", "○".yellow(), task.title)),
    }
}

/// Edit a task's title, notes, or priority.
///
/// # Errors
///
/// Returns `NotFound` if no task has this ID, or `InvalidInput` for a
/// bad priority name.
pub fn task_edit(
    id: i64,
    title: Option<String>,
    notes: Option<String>,
    priority: Option<String>,
    format: OutputFormat,
) -> Result<String, TempoError> {
    let store = TaskStore::new()?;
    let mut task = store.require(id)?;

    if let Some(t) = title {
        if t.is_empty() {
            return Err(TempoError::InvalidInput(
                "Task title cannot be empty".to_string(),
            ));
        }
        task.title = t;
    }
    if let Some(n) = notes {
        task.notes = n;
    }
    if let Some(p) = priority {
        task.priority = Priority::parse(&p)?;
    }

    store.update(&task)?;

    format_task(&task, format)
}

/// Remove a task.
///
/// # Errors
///
/// Returns `NotFound` if no task has this ID.
pub fn task_rm(id: i64, format: OutputFormat) -> Result<String, TempoError> {
    let store = TaskStore::new()?;

    if !store.delete(id)? {
        return Err(TempoError::NotFound(format!("task {id}")));
    }

    match format {
        OutputFormat::Json => Ok(format!("{{\"removed\": {id}}}")),
        OutputFormat::Pretty => Ok(format!("Removed task {id}")),
    }
}
