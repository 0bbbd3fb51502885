//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::TempoError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reset the current phase.
    Reset,
    /// Skip to the next phase.
    Skip,
    /// Move task selection down.
    SelectNext,
    /// Move task selection up.
    SelectPrevious,
    /// Toggle completion of the selected task.
    ToggleTask,
    /// Reload the task list.
    Refresh,
    /// Show key help.
    Help,
}

/// Handle terminal events.
///
/// Polls with a short timeout so the caller's tick cadence stays
/// responsive. Returns an action to take, or None.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, TempoError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TempoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TempoError::Terminal(format!("Event read failed: {e}")))?
        {
            // Ignore key release events on platforms that report them
            if key.kind == KeyEventKind::Release {
                return Ok(None);
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer controls
                KeyCode::Char(' ') => return Ok(Some(Action::Toggle)),
                KeyCode::Char('r') => return Ok(Some(Action::Reset)),
                KeyCode::Char('s') => return Ok(Some(Action::Skip)),

                // Task navigation - vim style
                KeyCode::Char('j') | KeyCode::Down => return Ok(Some(Action::SelectNext)),
                KeyCode::Char('k') | KeyCode::Up => return Ok(Some(Action::SelectPrevious)),

                // Task actions
                KeyCode::Char('c') | KeyCode::Enter => return Ok(Some(Action::ToggleTask)),
                KeyCode::Char('R') => return Ok(Some(Action::Refresh)),

                // Help
                KeyCode::Char('?') => return Ok(Some(Action::Help)),

                _ => {}
            }
        }
    }

    Ok(None)
}
