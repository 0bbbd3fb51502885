//! Configuration management for tempo.
//!
//! This module handles loading and saving configuration from `~/.tempo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, TimerConfig, TimerConfigPatch};
