//! Config command implementations.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::{Config, TimerConfigPatch};
use crate::error::TempoError;
use crate::output::{format_config_pretty, to_json};

/// Show current settings.
///
/// # Errors
///
/// Returns an error if the config file cannot be read.
pub fn config_show(format: OutputFormat) -> Result<String, TempoError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => Ok(format_config_pretty(&config)),
    }
}

/// Change a setting and persist it immediately.
///
/// # Errors
///
/// Returns `InvalidInput` for unknown keys or unparseable values.
pub fn config_set(key: &str, value: &str, format: OutputFormat) -> Result<String, TempoError> {
    let mut config = Config::load()?;

    let patch = patch_for(key, value)?;
    config.timer.apply(&patch);
    config.save()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => Ok(format!(
            "{} {} = {}",
            "set".green(),
            key,
            value.bold()
        )),
    }
}

/// Restore default settings.
///
/// # Errors
///
/// Returns an error without `--force`, or if the config cannot be
/// written.
pub fn config_reset(force: bool) -> Result<String, TempoError> {
    if !force {
        return Err(TempoError::Config(
            "This will restore all settings to their defaults.\nUse --force to confirm."
                .to_string(),
        ));
    }

    Config::default().save()?;
    Ok("Settings restored to defaults.".to_string())
}

/// Build a settings patch for a single key/value pair.
fn patch_for(key: &str, value: &str) -> Result<TimerConfigPatch, TempoError> {
    let mut patch = TimerConfigPatch::default();

    match key {
        "work" => patch.work_minutes = Some(parse_number(key, value)?),
        "short-break" => patch.short_break_minutes = Some(parse_number(key, value)?),
        "long-break" => patch.long_break_minutes = Some(parse_number(key, value)?),
        "sessions-until-long-break" => {
            patch.sessions_until_long_break = Some(parse_number(key, value)?);
        }
        "auto-start-breaks" => patch.auto_start_breaks = Some(parse_bool(key, value)?),
        "auto-start-work" => patch.auto_start_work = Some(parse_bool(key, value)?),
        "sound" => patch.sound_enabled = Some(parse_bool(key, value)?),
        "notify-on-skip" => patch.notify_on_skip = Some(parse_bool(key, value)?),
        _ => {
            return Err(TempoError::InvalidInput(format!(
                "Unknown setting '{key}'. Run 'tempo config show' to see available settings."
            )))
        }
    }

    Ok(patch)
}

fn parse_number(key: &str, value: &str) -> Result<u32, TempoError> {
    value.parse::<u32>().map_err(|_| {
        TempoError::InvalidInput(format!("'{key}' expects a positive number, got '{value}'"))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, TempoError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TempoError::InvalidInput(format!(
            "'{key}' expects true or false, got '{value}'"
        ))),
    }
}
