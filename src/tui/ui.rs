//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::features::tasks::Priority;
use crate::features::timer::Phase;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: timer, task list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Timer
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_timer(frame, app, chunks[0]);
    render_tasks(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the countdown block.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let phase = app.timer.phase();
    let color = phase_color(phase);

    let state = if app.timer.is_running() {
        "running"
    } else {
        "paused"
    };

    let title = format!(
        " {} ({}) | {} sessions | {}m today ",
        phase.display_name(),
        state,
        app.timer.completed_sessions(),
        app.work_today_minutes
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacing
            Constraint::Length(1), // countdown
            Constraint::Length(1), // spacing
            Constraint::Length(1), // gauge
        ])
        .split(inner);

    let countdown = Paragraph::new(app.timer.format_remaining())
        .style(
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(countdown, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(app.timer.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, rows[3]);
}

/// Render the task list.
fn render_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let status_icon = if task.completed { "[x]" } else { "[ ]" };

            let mut spans = vec![
                Span::styled(
                    format!("{status_icon} "),
                    Style::default().fg(if task.completed {
                        Color::Green
                    } else {
                        Color::White
                    }),
                ),
                Span::styled(
                    &task.title,
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  !{}", task.priority),
                    Style::default().fg(priority_color(task.priority)),
                ),
            ];

            if !task.notes.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", task.notes),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.tasks.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | s:skip | j/k:nav | c:done | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Cyan,
        Phase::ShortBreak | Phase::LongBreak => Color::Green,
    }
}

const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::DarkGray,
    }
}
