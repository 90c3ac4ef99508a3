//! CLI interface for standup-gen

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod report;
pub mod tasks;

pub use report::{GenerateCommand, ReportArgs, ViewCommand};
pub use tasks::TasksCommand;

/// standup-gen: daily standup reports from git history and a task list
#[derive(Parser)]
#[command(name = "standup-gen")]
#[command(about = "Generate daily standup reports from git history and a task list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Generates a standup report and writes it to the output directory.
    Generate(GenerateCommand),
    /// Builds the same report and prints it to stdout without writing a file.
    View(ViewCommand),
    /// Task file management.
    Tasks(TasksCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(generate_cmd) => generate_cmd.execute(),
            Commands::View(view_cmd) => view_cmd.execute(),
            Commands::Tasks(tasks_cmd) => tasks_cmd.execute(),
        }
    }
}
