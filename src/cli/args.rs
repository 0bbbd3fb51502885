use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::tasks::{TaskFilter, TaskSort};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "A pomodoro timer and task tracker for the terminal")]
#[command(long_about = "tempo - A pomodoro timer and task tracker for the terminal

Work in focused sessions with automatic short and long breaks, keep a
small task list next to the timer, and review how your days went.

QUICK START:
  tempo run                 Start the interactive timer
  tempo task add \"Write report !high\"   Capture a task
  tempo task list           Show open tasks
  tempo report week         See this week's work time

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tempo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Opens the full-screen timer with the task list alongside it.
    /// The countdown cycles through work sessions and breaks according
    /// to your settings; finished phases are recorded for 'history'
    /// and 'report'.
    ///
    /// # Keys
    ///
    ///   space      start / pause
    ///   r          reset the current phase
    ///   s          skip to the next phase
    ///   j/k        move through the task list
    ///   c          toggle completion of the selected task
    ///   ?          help
    ///   q          quit
    #[command(alias = "r")]
    Run,

    /// Manage the task list
    ///
    /// Add, list, edit, complete, and remove tasks. Tasks live in a
    /// local database next to your settings.
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Show or change settings
    ///
    /// Settings are stored in ~/.tempo/config.yaml and every change is
    /// written back immediately. Durations are minutes and are kept at
    /// 1 or more.
    #[command(alias = "c")]
    Config(ConfigArgs),

    /// View recent sessions
    ///
    /// Shows finished work and break phases, newest first.
    ///
    /// # Examples
    ///
    ///   tempo history             Last 10 sessions
    ///   tempo history -n 50       Last 50 sessions
    ///   tempo history -o json     Output as JSON
    #[command(alias = "h")]
    History {
        /// Number of sessions to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Summarize work time for a period
    ///
    /// Aggregates finished work sessions: total time, averages, a daily
    /// breakdown, and your current streak.
    ///
    /// # Examples
    ///
    ///   tempo report              This week
    ///   tempo report today
    ///   tempo report month
    ///   tempo report all
    Report {
        /// Period (today, week, month, all)
        #[arg(default_value = "week")]
        period: String,
    },

    /// Generate shell completions
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   tempo completions zsh > ~/.zfunc/_tempo
    ///   tempo completions bash > /etc/bash_completion.d/tempo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Task subcommand wrapper.
#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Task subcommands.
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    ///
    /// The text supports quick-add markers: '!high', '!medium', or
    /// '!low' set the priority, and everything after '//' becomes
    /// notes. Explicit flags win over markers.
    ///
    /// # Examples
    ///
    ///   tempo task add "buy milk"
    ///   tempo task add "finish report !high"
    ///   tempo task add "review PR // remember to check tests"
    #[command(alias = "a")]
    Add {
        /// Task text (with optional quick-add markers)
        text: String,

        /// Notes for the task
        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long, short = 'p')]
        priority: Option<String>,
    },

    /// List tasks
    ///
    /// # Examples
    ///
    ///   tempo task list
    ///   tempo task list --filter active
    ///   tempo task list --sort priority
    #[command(alias = "ls")]
    List {
        /// Which tasks to show
        #[arg(long, short = 'f', value_enum, default_value = "all")]
        filter: TaskFilter,

        /// Listing order
        #[arg(long, short = 's', value_enum, default_value = "created")]
        sort: TaskSort,
    },

    /// Mark a task as completed
    #[command(alias = "d")]
    Done {
        /// Task ID (from 'tempo task list')
        id: i64,
    },

    /// Reopen a completed task
    Reopen {
        /// Task ID (from 'tempo task list')
        id: i64,
    },

    /// Edit a task
    ///
    /// Only the given fields change.
    Edit {
        /// Task ID (from 'tempo task list')
        id: i64,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New notes
        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// New priority (low, medium, high)
        #[arg(long, short = 'p')]
        priority: Option<String>,
    },

    /// Remove a task
    #[command(alias = "remove")]
    Rm {
        /// Task ID (from 'tempo task list')
        id: i64,
    },
}

/// Config subcommand wrapper.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Change a setting
    ///
    /// Durations are minutes; flags take true/false.
    ///
    /// # Keys
    ///
    ///   work, short-break, long-break, sessions-until-long-break,
    ///   auto-start-breaks, auto-start-work, sound, notify-on-skip
    ///
    /// # Examples
    ///
    ///   tempo config set work 50
    ///   tempo config set auto-start-breaks false
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },

    /// Restore default settings
    Reset {
        /// Skip the confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
