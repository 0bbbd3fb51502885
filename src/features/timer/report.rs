//! Session history reports.
//!
//! Aggregates the session log into productivity summaries.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::storage::{SessionRecord, SessionStorage};
use crate::error::TempoError;
use crate::features::timer::engine::Phase;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// Get the start and end instants for this period.
    #[must_use]
    pub fn date_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        let today = now.date_naive();

        let (start_date, end_date) = match self {
            Self::Today => (today, today),
            Self::Week => (today - Duration::days(6), today),
            Self::Month => (today - Duration::days(29), today),
            Self::AllTime => (
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
                today,
            ),
        };

        let start = start_date.and_hms_opt(0, 0, 0).unwrap_or_default();
        let end = end_date.and_hms_opt(23, 59, 59).unwrap_or_default();
        (
            DateTime::from_naive_utc_and_offset(start, Utc),
            DateTime::from_naive_utc_and_offset(end, Utc),
        )
    }

    /// Parse period from string. Unrecognized input falls back to a week.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Self::Today,
            "month" | "m" | "30d" => Self::Month,
            "all" | "alltime" | "all-time" => Self::AllTime,
            _ => Self::Week,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Aggregated session data for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerReport {
    /// Report period name
    pub period: String,
    /// Total work time in minutes (expired work phases only)
    pub total_work_minutes: i64,
    /// Number of work phases run to expiry
    pub work_sessions: i64,
    /// Number of skipped work phases
    pub skipped_sessions: i64,
    /// Number of breaks taken
    pub breaks_taken: i64,
    /// Average work session length in minutes
    pub avg_session_minutes: f64,
    /// Daily breakdown, newest first
    pub daily: Vec<DailySessions>,
    /// Current streak (consecutive days with work time)
    pub streak_days: i64,
}

/// Work time per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySessions {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Total work minutes
    pub minutes: i64,
    /// Work session count
    pub sessions: i64,
}

impl TimerReport {
    /// Generate a report for the given period.
    ///
    /// # Errors
    ///
    /// Returns an error if the session history cannot be read.
    pub fn generate(storage: &SessionStorage, period: ReportPeriod) -> Result<Self, TempoError> {
        let (start, end) = period.date_range();
        let sessions = storage.get_range(start, end)?;

        let completed_work: Vec<&SessionRecord> = sessions
            .iter()
            .filter(|s| s.phase == Phase::Work && !s.skipped)
            .collect();

        let skipped_sessions = sessions
            .iter()
            .filter(|s| s.phase == Phase::Work && s.skipped)
            .count() as i64;

        let breaks_taken = sessions.iter().filter(|s| s.phase.is_break()).count() as i64;

        let total_work_minutes: i64 = completed_work.iter().map(|s| s.planned_seconds / 60).sum();
        let work_sessions = completed_work.len() as i64;

        #[allow(clippy::cast_precision_loss)]
        let avg_session_minutes = if work_sessions > 0 {
            total_work_minutes as f64 / work_sessions as f64
        } else {
            0.0
        };

        // Daily breakdown
        let mut daily_map: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
        for session in &completed_work {
            let date = session.started_at.with_timezone(&Local).date_naive();
            let entry = daily_map.entry(date).or_insert((0, 0));
            entry.0 += session.planned_seconds / 60;
            entry.1 += 1;
        }

        let mut daily: Vec<DailySessions> = daily_map
            .iter()
            .map(|(date, (minutes, sessions))| DailySessions {
                date: date.to_string(),
                minutes: *minutes,
                sessions: *sessions,
            })
            .collect();
        daily.sort_by(|a, b| b.date.cmp(&a.date));

        let streak_days = calculate_streak(&daily_map);

        Ok(Self {
            period: period.display_name().to_string(),
            total_work_minutes,
            work_sessions,
            skipped_sessions,
            breaks_taken,
            avg_session_minutes,
            daily,
            streak_days,
        })
    }
}

/// Count consecutive days with work time, ending today or yesterday.
fn calculate_streak(daily: &HashMap<NaiveDate, (i64, i64)>) -> i64 {
    if daily.is_empty() {
        return 0;
    }

    let today = Local::now().date_naive();
    let mut check_date = today;

    // A streak survives until a full day is missed
    if !daily.contains_key(&today) {
        check_date = today - Duration::days(1);
        if !daily.contains_key(&check_date) {
            return 0;
        }
    }

    let mut streak = 0;
    while daily.contains_key(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn create_test_storage() -> SessionStorage {
        let db = Database::open_in_memory().unwrap();
        SessionStorage::with_database(db)
    }

    #[test]
    fn test_report_period_today() {
        let period = ReportPeriod::Today;
        let (start, end) = period.date_range();

        assert!(start < end);
        assert_eq!(start.date_naive(), Utc::now().date_naive());
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!(ReportPeriod::parse("today"), ReportPeriod::Today);
        assert_eq!(ReportPeriod::parse("week"), ReportPeriod::Week);
        assert_eq!(ReportPeriod::parse("month"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::parse("all"), ReportPeriod::AllTime);
        assert_eq!(ReportPeriod::parse("nonsense"), ReportPeriod::Week);
    }

    #[test]
    fn test_generate_empty_report() {
        let storage = create_test_storage();
        let report = TimerReport::generate(&storage, ReportPeriod::Week).unwrap();

        assert_eq!(report.total_work_minutes, 0);
        assert_eq!(report.work_sessions, 0);
        assert_eq!(report.streak_days, 0);
        assert!(report.daily.is_empty());
    }

    #[test]
    fn test_generate_report_counts_work_only() {
        let storage = create_test_storage();
        let now = Utc::now();

        let mut work = SessionRecord::finished(Phase::Work, now, 1500, false);
        storage.record(&mut work).unwrap();

        let mut skipped = SessionRecord::finished(Phase::Work, now, 1500, true);
        storage.record(&mut skipped).unwrap();

        let mut brk = SessionRecord::finished(Phase::ShortBreak, now, 300, false);
        storage.record(&mut brk).unwrap();

        let report = TimerReport::generate(&storage, ReportPeriod::Today).unwrap();

        assert_eq!(report.work_sessions, 1);
        assert_eq!(report.total_work_minutes, 25);
        assert_eq!(report.skipped_sessions, 1);
        assert_eq!(report.breaks_taken, 1);
        assert!((report.avg_session_minutes - 25.0).abs() < f64::EPSILON);
        assert_eq!(report.streak_days, 1);
    }

    #[test]
    fn test_streak_empty() {
        assert_eq!(calculate_streak(&HashMap::new()), 0);
    }

    #[test]
    fn test_streak_consecutive_days() {
        let today = Local::now().date_naive();
        let mut daily = HashMap::new();
        daily.insert(today, (25, 1));
        daily.insert(today - Duration::days(1), (50, 2));
        daily.insert(today - Duration::days(2), (25, 1));
        // Gap at day 3
        daily.insert(today - Duration::days(4), (25, 1));

        assert_eq!(calculate_streak(&daily), 3);
    }

    #[test]
    fn test_streak_allows_no_session_today_yet() {
        let today = Local::now().date_naive();
        let mut daily = HashMap::new();
        daily.insert(today - Duration::days(1), (25, 1));
        daily.insert(today - Duration::days(2), (25, 1));

        assert_eq!(calculate_streak(&daily), 2);
    }
}
