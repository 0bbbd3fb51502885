//! Session history storage.
//!
//! Persists finished timer phases to the local database.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::engine::Phase;
use crate::error::TempoError;
use crate::storage::Database;

/// A finished timer phase.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionRecord {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Which phase this was
    pub phase: Phase,
    /// When the phase started
    pub started_at: DateTime<Utc>,
    /// When the phase ended
    pub ended_at: DateTime<Utc>,
    /// Configured duration of the phase in seconds
    pub planned_seconds: i64,
    /// Whether the phase was skipped rather than run to expiry
    pub skipped: bool,
}

impl SessionRecord {
    /// Create a record for a phase that just ended.
    #[must_use]
    pub fn finished(
        phase: Phase,
        started_at: DateTime<Utc>,
        planned_seconds: i64,
        skipped: bool,
    ) -> Self {
        Self {
            id: None,
            phase,
            started_at,
            ended_at: Utc::now(),
            planned_seconds,
            skipped,
        }
    }
}

/// Storage for the session history.
pub struct SessionStorage {
    db: Database,
}

impl SessionStorage {
    /// Create a new session storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, TempoError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a finished phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record(&self, session: &mut SessionRecord) -> Result<(), TempoError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO timer_sessions (phase, started_at, ended_at, planned_seconds, skipped)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                phase_to_string(session.phase),
                session.started_at.to_rfc3339(),
                session.ended_at.to_rfc3339(),
                session.planned_seconds,
                session.skipped,
            ],
        )
        .map_err(|e| TempoError::Database(format!("Failed to insert session: {e}")))?;

        session.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<SessionRecord>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, skipped
                  FROM timer_sessions WHERE id = ?1",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_record)
            .optional()
            .map_err(|e| TempoError::Database(format!("Failed to query session: {e}")))?;

        Ok(result)
    }

    /// Get recent sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<SessionRecord>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, skipped
                  FROM timer_sessions
                  ORDER BY started_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_record)
            .map_err(|e| TempoError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| TempoError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    /// Get sessions that started within a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SessionRecord>, TempoError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, skipped
                  FROM timer_sessions
                  WHERE started_at >= ?1 AND started_at < ?2
                  ORDER BY started_at DESC",
            )
            .map_err(|e| TempoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_rfc3339(), end.to_rfc3339()], row_to_record)
            .map_err(|e| TempoError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| TempoError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    /// Total seconds of finished work phases in a date range.
    ///
    /// Skipped phases and breaks don't count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_work_seconds(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, TempoError> {
        let conn = self.db.connection();

        let total: i64 = conn
            .query_row(
                r"SELECT COALESCE(SUM(planned_seconds), 0)
                  FROM timer_sessions
                  WHERE started_at >= ?1 AND started_at < ?2
                    AND phase = 'work'
                    AND skipped = 0",
                [start.to_rfc3339(), end.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| TempoError::Database(format!("Failed to query work time: {e}")))?;

        Ok(total)
    }

    /// Delete all sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all(&self) -> Result<(), TempoError> {
        let conn = self.db.connection();

        conn.execute("DELETE FROM timer_sessions", [])
            .map_err(|e| TempoError::Database(format!("Failed to delete sessions: {e}")))?;

        Ok(())
    }
}

/// Convert a database row to a `SessionRecord`.
fn row_to_record(row: &Row<'_>) -> Result<SessionRecord, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let phase_str: String = row.get(1)?;
    let started_at_str: String = row.get(2)?;
    let ended_at_str: String = row.get(3)?;
    let planned_seconds: i64 = row.get(4)?;
    let skipped: bool = row.get(5)?;

    Ok(SessionRecord {
        id: Some(id),
        phase: string_to_phase(&phase_str),
        started_at: parse_timestamp(&started_at_str),
        ended_at: parse_timestamp(&ended_at_str),
        planned_seconds,
        skipped,
    })
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn phase_to_string(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "work",
        Phase::ShortBreak => "short_break",
        Phase::LongBreak => "long_break",
    }
}

fn string_to_phase(s: &str) -> Phase {
    match s {
        "short_break" => Phase::ShortBreak,
        "long_break" => Phase::LongBreak,
        _ => Phase::Work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_storage() -> SessionStorage {
        let db = Database::open_in_memory().unwrap();
        SessionStorage::with_database(db)
    }

    #[test]
    fn test_record_and_get() {
        let storage = create_test_storage();

        let mut session =
            SessionRecord::finished(Phase::Work, Utc::now() - Duration::minutes(25), 1500, false);

        storage.record(&mut session).unwrap();
        assert!(session.id.is_some());

        let loaded = storage.get(session.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded.phase, Phase::Work);
        assert_eq!(loaded.planned_seconds, 1500);
        assert!(!loaded.skipped);
    }

    #[test]
    fn test_get_recent() {
        let storage = create_test_storage();

        for i in 0..5 {
            let mut session = SessionRecord::finished(
                Phase::Work,
                Utc::now() - Duration::minutes(30 * i),
                1500,
                false,
            );
            storage.record(&mut session).unwrap();
        }

        let recent = storage.get_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
    }

    #[test]
    fn test_work_seconds_excludes_breaks_and_skips() {
        let storage = create_test_storage();
        let now = Utc::now();

        let mut work = SessionRecord::finished(Phase::Work, now - Duration::minutes(25), 1500, false);
        storage.record(&mut work).unwrap();

        let mut brk =
            SessionRecord::finished(Phase::ShortBreak, now - Duration::minutes(5), 300, false);
        storage.record(&mut brk).unwrap();

        let mut skipped =
            SessionRecord::finished(Phase::Work, now - Duration::minutes(60), 1500, true);
        storage.record(&mut skipped).unwrap();

        let total = storage
            .get_work_seconds(now - Duration::hours(2), now + Duration::hours(1))
            .unwrap();
        assert_eq!(total, 1500);
    }

    #[test]
    fn test_delete_all() {
        let storage = create_test_storage();

        let mut session = SessionRecord::finished(Phase::Work, Utc::now(), 1500, false);
        storage.record(&mut session).unwrap();

        storage.delete_all().unwrap();
        assert!(storage.get_recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_phase_round_trip() {
        for phase in [Phase::Work, Phase::ShortBreak, Phase::LongBreak] {
            assert_eq!(string_to_phase(phase_to_string(phase)), phase);
        }
    }
}
