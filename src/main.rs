use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tempo::cli::args::{Cli, Commands, ConfigCommands, TaskCommands};
use tempo::cli::commands;
use tempo::error::TempoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TempoError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Run => {
            tempo::tui::run()?;
            String::new()
        }
        Commands::Task(args) => match args.command {
            TaskCommands::Add {
                text,
                notes,
                priority,
            } => commands::task_add(&text, notes, priority, format)?,
            TaskCommands::List { filter, sort } => commands::task_list(filter, sort, format)?,
            TaskCommands::Done { id } => commands::task_done(id, format)?,
            TaskCommands::Reopen { id } => commands::task_reopen(id, format)?,
            TaskCommands::Edit {
                id,
                title,
                notes,
                priority,
            } => commands::task_edit(id, title, notes, priority, format)?,
            TaskCommands::Rm { id } => commands::task_rm(id, format)?,
        },
        Commands::Config(args) => match args.command {
            ConfigCommands::Show => commands::config_show(format)?,
            ConfigCommands::Set { key, value } => commands::config_set(&key, &value, format)?,
            ConfigCommands::Reset { force } => commands::config_reset(force)?,
        },
        Commands::History { limit } => commands::history(limit, format)?,
        Commands::Report { period } => commands::report(&period, format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
