//! Terminal User Interface for tempo.
//!
//! The interactive timer: a full-screen countdown with the task list
//! alongside it. Built with ratatui and crossterm.
//!
//! The event loop here owns the one-second cadence that drives the
//! timer engine; the engine itself never touches a clock.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TempoError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run() -> Result<(), TempoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TempoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TempoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TempoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let result = App::new().and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TempoError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TempoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle_timer(),
                event::Action::Reset => app.reset_timer(),
                event::Action::Skip => app.skip_phase()?,
                event::Action::SelectNext => app.select_next(),
                event::Action::SelectPrevious => app.select_previous(),
                event::Action::ToggleTask => app.toggle_selected_task()?,
                event::Action::Refresh => {
                    app.refresh_tasks()?;
                    app.reload_settings()?;
                }
                event::Action::Help => app.show_help(),
            }
        }

        // Advance the countdown once per elapsed wall-clock second
        app.advance_clock()?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
