//! Command-line interface for tempo.

pub mod args;
pub mod commands;
