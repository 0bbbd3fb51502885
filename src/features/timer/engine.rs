//! The session-cycling countdown engine.
//!
//! A single countdown advances once per second while running. When it
//! expires (or is skipped) the timer moves to the next phase of the
//! work/break cycle: every Nth completed work session is followed by a
//! long break, every other one by a short break, and every break by work.
//!
//! The engine performs no I/O and owns no clock. The caller drives it by
//! invoking [`SessionTimer::tick`] at a one-second cadence and reacts to
//! the returned [`PhaseChange`], e.g. by firing a notification or logging
//! the finished session.

use serde::{Deserialize, Serialize};

use crate::config::{TimerConfig, TimerConfigPatch};

/// The current segment of the work/rest cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work
    Work,
    /// Short break between work sessions
    ShortBreak,
    /// Long break after every Nth work session
    LongBreak,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseCause {
    /// The countdown ran to zero.
    Expiry,
    /// The user skipped ahead.
    Skip,
}

/// The outcome of a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseChange {
    /// Phase that just ended.
    pub from: Phase,
    /// Phase the timer moved to.
    pub to: Phase,
    /// Whether the phase expired naturally or was skipped.
    pub cause: PhaseCause,
    /// Completed work session count after the transition.
    pub completed_sessions: u32,
    /// Whether the new phase started automatically.
    pub auto_started: bool,
}

/// The session timer state machine.
///
/// Created with phase=Work, the full work duration remaining, and the
/// countdown paused. Mutated only by the control operations below; the
/// state dies with the owning process.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    settings: TimerConfig,
    phase: Phase,
    remaining_seconds: u32,
    completed_sessions: u32,
    running: bool,
}

impl SessionTimer {
    /// Create a new timer from settings.
    ///
    /// The settings are clamped so every phase has a positive duration.
    #[must_use]
    pub fn new(mut settings: TimerConfig) -> Self {
        settings.clamp();
        let remaining_seconds = settings.work_minutes * 60;

        Self {
            settings,
            phase: Phase::Work,
            remaining_seconds,
            completed_sessions: 0,
            running: false,
        }
    }

    /// Start or resume the countdown. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown. No-op if already paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Toggle between running and paused.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop the countdown and restore the current phase's full duration.
    ///
    /// Phase and completed session count are unchanged.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.phase_seconds(self.phase);
    }

    /// Advance the countdown by one second.
    ///
    /// Called at a one-second cadence by the owning event loop. Inert
    /// while paused. When the countdown reaches zero the phase transition
    /// runs and the outcome is returned; whether ticks keep having effect
    /// afterwards depends on the auto-start settings.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.running {
            return None;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            Some(self.advance(PhaseCause::Expiry))
        } else {
            None
        }
    }

    /// Skip to the next phase immediately.
    ///
    /// Runs the same transition rule as a natural expiry, counter
    /// increment included.
    pub fn skip(&mut self) -> PhaseChange {
        self.advance(PhaseCause::Skip)
    }

    /// Merge a settings update into the timer.
    ///
    /// When the countdown is paused, the remaining time is recomputed
    /// from the new duration for the current phase. A running countdown
    /// keeps its remaining time; the new durations apply from the next
    /// phase onwards.
    pub fn update_settings(&mut self, patch: &TimerConfigPatch) {
        self.settings.apply(patch);
        if !self.running {
            self.remaining_seconds = self.phase_seconds(self.phase);
        }
    }

    /// The phase-transition rule, shared by expiry and skip.
    ///
    /// Completing a work session increments the counter first, so the Nth
    /// session (N = `sessions_until_long_break`) lands on a long break,
    /// 1-indexed.
    fn advance(&mut self, cause: PhaseCause) -> PhaseChange {
        let from = self.phase;

        let to = match self.phase {
            Phase::Work => {
                self.completed_sessions += 1;
                if self.completed_sessions % self.settings.sessions_until_long_break == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };

        self.phase = to;
        self.remaining_seconds = self.phase_seconds(to);
        self.running = if to.is_break() {
            self.settings.auto_start_breaks
        } else {
            self.settings.auto_start_work
        };

        PhaseChange {
            from,
            to,
            cause,
            completed_sessions: self.completed_sessions,
            auto_started: self.running,
        }
    }

    /// Configured duration of a phase, in seconds.
    #[must_use]
    pub const fn phase_seconds(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Work => self.settings.work_minutes,
            Phase::ShortBreak => self.settings.short_break_minutes,
            Phase::LongBreak => self.settings.long_break_minutes,
        };
        minutes * 60
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining seconds in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Completed work session count.
    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &TimerConfig {
        &self.settings
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.phase_seconds(self.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(total))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TimerConfig {
        TimerConfig::default()
    }

    #[test]
    fn test_new_timer() {
        let timer = SessionTimer::new(settings());

        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.completed_sessions(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_pause() {
        let mut timer = SessionTimer::new(settings());

        timer.start();
        assert!(timer.is_running());
        timer.start();
        assert!(timer.is_running());

        timer.pause();
        assert!(!timer.is_running());
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut timer = SessionTimer::new(settings());

        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 25 * 60);

        timer.start();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 25 * 60 - 1);
    }

    #[test]
    fn test_full_work_phase_transitions_once() {
        // Spec scenario: {25, 5, 15, 4}, 1500 ticks from running Work.
        let mut timer = SessionTimer::new(settings());
        timer.start();

        let mut changes = Vec::new();
        for _ in 0..1500 {
            if let Some(change) = timer.tick() {
                changes.push(change);
            }
        }

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].from, Phase::Work);
        assert_eq!(changes[0].to, Phase::ShortBreak);
        assert_eq!(changes[0].cause, PhaseCause::Expiry);
        assert_eq!(timer.phase(), Phase::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.completed_sessions(), 1);
        // Defaults auto-start breaks
        assert!(timer.is_running());
    }

    #[test]
    fn test_long_break_every_nth_session() {
        let mut timer = SessionTimer::new(settings());

        // Sessions 1..3 yield short breaks, the 4th a long break,
        // the 5th a short break again.
        for n in 1..=5 {
            assert_eq!(timer.phase(), Phase::Work);
            let change = timer.skip();
            let expected = if n % 4 == 0 {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            };
            assert_eq!(change.to, expected, "session {n}");
            assert_eq!(change.completed_sessions, n);
            timer.skip(); // break -> work
        }
    }

    #[test]
    fn test_break_returns_to_work() {
        let mut config = settings();
        config.auto_start_work = false;
        let mut timer = SessionTimer::new(config);

        timer.skip(); // work -> short break
        let change = timer.skip(); // break -> work

        assert_eq!(change.from, Phase::ShortBreak);
        assert_eq!(change.to, Phase::Work);
        // Breaks do not increment the counter
        assert_eq!(change.completed_sessions, 1);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert!(!change.auto_started);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_restores_duration() {
        let mut timer = SessionTimer::new(settings());
        timer.start();
        for _ in 0..100 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 25 * 60 - 100);

        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.completed_sessions(), 0);
    }

    #[test]
    fn test_skip_at_threshold_yields_long_break() {
        // Spec edge case: count 3 -> 4 with N=4 lands on the long break.
        let mut timer = SessionTimer::new(settings());
        for _ in 0..3 {
            timer.skip(); // work -> break
            timer.skip(); // break -> work
        }
        assert_eq!(timer.completed_sessions(), 3);
        assert_eq!(timer.phase(), Phase::Work);

        let change = timer.skip();

        assert_eq!(change.to, Phase::LongBreak);
        assert_eq!(change.completed_sessions, 4);
        assert_eq!(change.cause, PhaseCause::Skip);
        assert_eq!(timer.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn test_update_settings_while_paused_recomputes() {
        let mut timer = SessionTimer::new(settings());

        timer.update_settings(&TimerConfigPatch {
            work_minutes: Some(10),
            ..TimerConfigPatch::default()
        });

        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_update_settings_while_running_keeps_remaining() {
        let mut timer = SessionTimer::new(settings());
        timer.start();
        for _ in 0..60 {
            timer.tick();
        }
        let before = timer.remaining_seconds();

        timer.update_settings(&TimerConfigPatch {
            work_minutes: Some(10),
            ..TimerConfigPatch::default()
        });

        assert_eq!(timer.remaining_seconds(), before);
        // ...but the next work phase uses the new duration.
        timer.skip();
        timer.skip();
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_auto_start_flags() {
        let mut config = settings();
        config.auto_start_breaks = false;
        let mut timer = SessionTimer::new(config);
        timer.start();

        let change = timer.skip();
        assert!(!change.auto_started);
        assert!(!timer.is_running());

        // Paused at the full break duration; ticks are inert until start().
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_one_minute_phase() {
        let mut config = settings();
        config.work_minutes = 1;
        let mut timer = SessionTimer::new(config);
        timer.start();

        for _ in 0..59 {
            assert!(timer.tick().is_none());
        }
        let change = timer.tick();
        assert!(change.is_some());
    }

    #[test]
    fn test_clamped_settings() {
        let mut config = settings();
        config.work_minutes = 0;
        let timer = SessionTimer::new(config);

        // Clamped to one minute so the countdown can always make progress.
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_progress() {
        let mut timer = SessionTimer::new(settings());
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.start();
        for _ in 0..750 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(25 * 60), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
    }
}
