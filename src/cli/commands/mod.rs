//! Command implementations for tempo.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod history;
mod task;

pub use config::{config_reset, config_set, config_show};
pub use history::{history, report};
pub use task::{task_add, task_done, task_edit, task_list, task_reopen, task_rm};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Generate a shell completion script.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "tempo", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_not_empty() {
        let script = completions(Shell::Bash);
        assert!(script.contains("tempo"));
    }
}
