//! Pretty (human-readable) output formatting for tempo.

use colored::Colorize;

use crate::config::Config;
use crate::features::tasks::{Priority, Task};
use crate::features::timer::{format_mmss, Phase, SessionRecord, TimerReport};

/// Format a list of tasks as a pretty table
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No tasks. Add one with: tempo task add");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let id = task.id.map_or_else(|| "-".to_string(), |id| id.to_string());

        let mut line = format!("{} {:>3}  {}", status_icon, id.dimmed(), task.title.bold());

        line.push_str(&format!("  {}", priority_marker(task.priority)));

        if !task.notes.is_empty() {
            line.push_str(&format!("  {}", task.notes.dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
#[must_use]
pub fn format_task_pretty(task: &Task) -> String {
    let status_icon = if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, task.title.bold());

    if let Some(id) = task.id {
        output.push_str(&format!("  {}: {}\n", "ID".dimmed(), id));
    }
    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), task.priority));

    if !task.notes.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Notes".dimmed(), task.notes));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        task.created_at_local().format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Format session history as a pretty table
#[must_use]
pub fn format_sessions_pretty(sessions: &[SessionRecord]) -> String {
    if sessions.is_empty() {
        return "No sessions recorded yet.\n\nStart the timer with: tempo run".to_string();
    }

    let mut output = String::new();
    output.push_str(&"Session History".bold().to_string());
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "{:<17} {:<12} {:>8}   {}\n",
        "Date", "Phase", "Length", "Ended"
    ));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let date = session
            .started_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();

        let phase = match session.phase {
            Phase::Work => "Work".cyan().to_string(),
            Phase::ShortBreak => "Short".green().to_string(),
            Phase::LongBreak => "Long".green().to_string(),
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let length = format_mmss(session.planned_seconds.max(0) as u32);

        let ended = if session.skipped {
            "skipped".yellow().to_string()
        } else {
            "expired".dimmed().to_string()
        };

        output.push_str(&format!("{date:<17} {phase:<12} {length:>8}   {ended}\n"));
    }

    output
}

/// Format a session report as pretty output
#[must_use]
pub fn format_report_pretty(report: &TimerReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Report: {}", report.period).bold().to_string());
    lines.push("═".repeat(50));
    lines.push(String::new());

    lines.push("Summary".to_string());
    lines.push("─".repeat(40));
    lines.push(format!(
        "  Total work time:   {}",
        format_minutes(report.total_work_minutes)
    ));
    lines.push(format!("  Work sessions:     {}", report.work_sessions));
    lines.push(format!("  Skipped sessions:  {}", report.skipped_sessions));
    lines.push(format!("  Breaks taken:      {}", report.breaks_taken));
    lines.push(format!(
        "  Average session:   {:.0} minutes",
        report.avg_session_minutes
    ));
    lines.push(format!("  Current streak:    {} days", report.streak_days));

    if !report.daily.is_empty() {
        lines.push(String::new());
        lines.push("Recent Days".to_string());
        lines.push("─".repeat(40));

        let max_minutes = report.daily.iter().map(|d| d.minutes).max().unwrap_or(1).max(1);
        for day in report.daily.iter().take(7) {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bar_len = (day.minutes as f64 / max_minutes as f64 * 20.0) as usize;
            lines.push(format!(
                "  {} {:>4}m {} ({} sessions)",
                day.date,
                day.minutes,
                "█".repeat(bar_len),
                day.sessions
            ));
        }
    }

    lines.join("\n")
}

/// Format the configuration as pretty output
#[must_use]
pub fn format_config_pretty(config: &Config) -> String {
    let timer = &config.timer;
    let mut lines = Vec::new();

    lines.push("Timer Settings".bold().to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  work:                     {} min", timer.work_minutes));
    lines.push(format!("  short-break:              {} min", timer.short_break_minutes));
    lines.push(format!("  long-break:               {} min", timer.long_break_minutes));
    lines.push(format!(
        "  sessions-until-long-break: {}",
        timer.sessions_until_long_break
    ));
    lines.push(format!("  auto-start-breaks:        {}", timer.auto_start_breaks));
    lines.push(format!("  auto-start-work:          {}", timer.auto_start_work));
    lines.push(format!("  sound:                    {}", timer.sound_enabled));
    lines.push(format!("  notify-on-skip:           {}", timer.notify_on_skip));

    lines.join("\n")
}

fn priority_marker(priority: Priority) -> String {
    match priority {
        Priority::High => "!high".red().to_string(),
        Priority::Medium => "!med".yellow().to_string(),
        Priority::Low => "!low".dimmed().to_string(),
    }
}

fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::Priority;

    #[test]
    fn test_format_empty_tasks() {
        let output = format_tasks_pretty(&[], "All");
        assert!(output.contains("0 items"));
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn test_format_tasks_shows_titles() {
        let tasks = vec![
            Task::new("first task", "", Priority::High),
            Task::new("second task", "some notes", Priority::Low),
        ];

        let output = format_tasks_pretty(&tasks, "All");
        assert!(output.contains("2 items"));
        assert!(output.contains("first task"));
        assert!(output.contains("second task"));
        assert!(output.contains("some notes"));
    }

    #[test]
    fn test_format_empty_sessions() {
        let output = format_sessions_pretty(&[]);
        assert!(output.contains("No sessions"));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(25), "25m");
        assert_eq!(format_minutes(90), "1h 30m");
        assert_eq!(format_minutes(0), "0m");
    }

    #[test]
    fn test_format_config_lists_all_keys() {
        let output = format_config_pretty(&Config::default());
        for key in [
            "work:",
            "short-break:",
            "long-break:",
            "sessions-until-long-break:",
            "auto-start-breaks:",
            "auto-start-work:",
            "sound:",
            "notify-on-skip:",
        ] {
            assert!(output.contains(key), "missing {key}");
        }
    }
}
