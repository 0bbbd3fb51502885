//! Application state for the TUI.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::{Config, TimerConfigPatch};
use crate::error::TempoError;
use crate::features::tasks::{Task, TaskFilter, TaskSort, TaskStore};
use crate::features::timer::{
    PhaseCause, PhaseChange, ReportPeriod, SessionRecord, SessionStorage, SessionTimer,
};
use crate::notify;

/// Application state.
pub struct App {
    /// The session timer.
    pub timer: SessionTimer,
    /// Task persistence.
    tasks_store: TaskStore,
    /// Session history persistence.
    sessions: SessionStorage,
    /// Current task list.
    pub tasks: Vec<Task>,
    /// Currently selected task index.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Work minutes finished today, for the header.
    pub work_today_minutes: i64,
    /// When the current phase began (for the session log).
    phase_started_at: DateTime<Utc>,
    /// Last time the countdown was advanced.
    last_tick: Instant,
}

impl App {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if settings or storage cannot be opened.
    pub fn new() -> Result<Self, TempoError> {
        let config = Config::load()?;
        let timer = SessionTimer::new(config.timer);

        let tasks_store = TaskStore::new()?;
        let sessions = SessionStorage::new()?;
        let tasks = tasks_store.list(TaskFilter::Active, TaskSort::Priority)?;

        let (start, end) = ReportPeriod::Today.date_range();
        let work_today_minutes = sessions.get_work_seconds(start, end)? / 60;

        Ok(Self {
            timer,
            tasks_store,
            sessions,
            tasks,
            selected: 0,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            work_today_minutes,
            phase_started_at: Utc::now(),
            last_tick: Instant::now(),
        })
    }

    /// Advance the countdown for every full second of wall-clock time
    /// that has passed since the last call.
    ///
    /// # Errors
    ///
    /// Returns an error if a finished phase cannot be recorded.
    pub fn advance_clock(&mut self) -> Result<(), TempoError> {
        while self.last_tick.elapsed() >= Duration::from_secs(1) {
            self.last_tick += Duration::from_secs(1);

            if let Some(change) = self.timer.tick() {
                self.on_phase_change(change)?;
            }
        }
        Ok(())
    }

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
        self.status = Some(
            if self.timer.is_running() {
                "Timer running"
            } else {
                "Timer paused"
            }
            .to_string(),
        );
    }

    /// Reset the current phase.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.status = Some(format!("Reset {}", self.timer.phase()));
    }

    /// Skip to the next phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the finished phase cannot be recorded.
    pub fn skip_phase(&mut self) -> Result<(), TempoError> {
        let change = self.timer.skip();
        self.on_phase_change(change)
    }

    /// React to a phase transition: log the finished phase, fire the
    /// notification if configured, and surface a status line.
    fn on_phase_change(&mut self, change: PhaseChange) -> Result<(), TempoError> {
        let planned = i64::from(self.timer.phase_seconds(change.from));
        let mut record = SessionRecord::finished(
            change.from,
            self.phase_started_at,
            planned,
            change.cause == PhaseCause::Skip,
        );
        self.sessions.record(&mut record)?;
        self.phase_started_at = Utc::now();

        let (start, end) = ReportPeriod::Today.date_range();
        self.work_today_minutes = self.sessions.get_work_seconds(start, end)? / 60;

        let settings = self.timer.settings();
        let notify_wanted = settings.sound_enabled
            && (change.cause == PhaseCause::Expiry || settings.notify_on_skip);
        if notify_wanted {
            // Best-effort: a missing notification daemon shouldn't stop the timer.
            notify::phase_ended(&change).ok();
        }

        self.status = Some(format!(
            "{} → {} (session {})",
            change.from, change.to, change.completed_sessions
        ));

        Ok(())
    }

    /// Reload the task list from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the task list cannot be read.
    pub fn refresh_tasks(&mut self) -> Result<(), TempoError> {
        self.tasks = self.tasks_store.list(TaskFilter::Active, TaskSort::Priority)?;

        // Adjust selection if it's out of bounds
        if !self.tasks.is_empty() && self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }

        self.status = Some(format!("Refreshed {} tasks", self.tasks.len()));
        Ok(())
    }

    /// Re-read settings from disk and merge them into the timer.
    ///
    /// While paused, the remaining time is recomputed from the new
    /// duration for the current phase; a running countdown is left
    /// untouched until its next phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read.
    pub fn reload_settings(&mut self) -> Result<(), TempoError> {
        let timer = Config::load()?.timer;

        self.timer.update_settings(&TimerConfigPatch {
            work_minutes: Some(timer.work_minutes),
            short_break_minutes: Some(timer.short_break_minutes),
            long_break_minutes: Some(timer.long_break_minutes),
            sessions_until_long_break: Some(timer.sessions_until_long_break),
            auto_start_breaks: Some(timer.auto_start_breaks),
            auto_start_work: Some(timer.auto_start_work),
            sound_enabled: Some(timer.sound_enabled),
            notify_on_skip: Some(timer.notify_on_skip),
        });

        Ok(())
    }

    /// Get the currently selected task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
    }

    /// Toggle completion of the selected task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be updated.
    pub fn toggle_selected_task(&mut self) -> Result<(), TempoError> {
        if let Some(task) = self.selected_task() {
            let Some(id) = task.id else { return Ok(()) };
            let completed = !task.completed;

            let updated = self.tasks_store.set_completed(id, completed)?;
            self.refresh_tasks()?;
            self.status = Some(if completed {
                format!("Completed: {}", updated.title)
            } else {
                format!("Reopened: {}", updated.title)
            });
        }
        Ok(())
    }

    /// Show the key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(
            "space:start/pause | r:reset | s:skip | j/k:nav | c:done | R:refresh | q:quit"
                .to_string(),
        );
    }
}
