//! Task persistence.
//!
//! CRUD operations over the `tasks` table.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::task::{Priority, Task, TaskFilter, TaskSort};
use crate::error::TempoError;
use crate::storage::Database;

/// Storage for the task list.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Create a new task store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, TempoError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new task. The assigned ID is written back into `task`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(&self, task: &mut Task) -> Result<(), TempoError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO tasks (title, notes, priority, completed, created_at, completed_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                task.title,
                task.notes,
                task.priority.as_str(),
                task.completed,
                task.created_at.to_rfc3339(),
                task.completed_at.map(|t| t.to_rfc3339()),
            ],
        )
        .map_err(|e| TempoError::Database(format!("Failed to insert task: {e}")))?;

        task.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a task by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Task>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, notes, priority, completed, created_at, completed_at
                  FROM tasks WHERE id = ?1",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_task)
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query task: {e}")))?;

        Ok(result)
    }

    /// Get a task by ID, or a `NotFound` error.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has this ID.
    pub fn require(&self, id: i64) -> Result<Task, TempoError> {
        self.get(id)?
            .ok_or_else(|| TempoError::NotFound(format!("task {id}")))
    }

    /// List tasks matching a filter, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, filter: TaskFilter, sort: TaskSort) -> Result<Vec<Task>, TempoError> {
        let conn = self.db.connection();

        let where_clause = match filter {
            TaskFilter::All => "",
            TaskFilter::Active => "WHERE completed = 0",
            TaskFilter::Completed => "WHERE completed = 1",
        };

        // Priority sorts high-first; the CASE keeps the ordering in SQL
        // so listing stays a single query.
        let order_clause = match sort {
            TaskSort::Created => "ORDER BY created_at DESC",
            TaskSort::Priority => {
                "ORDER BY CASE priority
                    WHEN 'high' THEN 0
                    WHEN 'medium' THEN 1
                    ELSE 2
                 END, created_at DESC"
            }
        };

        let sql = format!(
            "SELECT id, title, notes, priority, completed, created_at, completed_at
             FROM tasks {where_clause} {order_clause}"
        );

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_task)
            .map_err(|e| TempoError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(|e| TempoError::Database(e.to_string()))?);
        }

        Ok(tasks)
    }

    /// Update a task's title, notes, and priority.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has this ID.
    pub fn update(&self, task: &Task) -> Result<(), TempoError> {
        let Some(id) = task.id else {
            return Err(TempoError::NotFound("task without an ID".to_string()));
        };

        let conn = self.db.connection();

        let rows = conn
            .execute(
                r"UPDATE tasks SET
                  title = ?1,
                  notes = ?2,
                  priority = ?3,
                  completed = ?4,
                  completed_at = ?5
                  WHERE id = ?6",
                params![
                    task.title,
                    task.notes,
                    task.priority.as_str(),
                    task.completed,
                    task.completed_at.map(|t| t.to_rfc3339()),
                    id,
                ],
            )
            .map_err(|e| TempoError::Database(format!("Failed to update task: {e}")))?;

        if rows == 0 {
            return Err(TempoError::NotFound(format!("task {id}")));
        }

        Ok(())
    }

    /// Mark a task completed (or reopen it). Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has this ID.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<Task, TempoError> {
        let mut task = self.require(id)?;

        task.completed = completed;
        task.completed_at = completed.then(Utc::now);
        self.update(&task)?;

        Ok(task)
    }

    /// Delete a task. Returns true if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, TempoError> {
        let conn = self.db.connection();

        let rows = conn
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .map_err(|e| TempoError::Database(format!("Failed to delete task: {e}")))?;

        Ok(rows > 0)
    }

    /// Count open tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active(&self) -> Result<i64, TempoError> {
        let conn = self.db.connection();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tasks WHERE completed = 0", [], |row| {
                row.get(0)
            })
            .map_err(|e| TempoError::Database(format!("Failed to count tasks: {e}")))?;

        Ok(count)
    }
}

/// Convert a database row to a `Task`.
fn row_to_task(row: &Row<'_>) -> Result<Task, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let notes: String = row.get(2)?;
    let priority_str: String = row.get(3)?;
    let completed: bool = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    let completed_at_str: Option<String> = row.get(6)?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    let completed_at = completed_at_str.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    });

    Ok(Task {
        id: Some(id),
        title,
        notes,
        priority: Priority::from_db(&priority_str),
        completed,
        created_at,
        completed_at,
    })
}
