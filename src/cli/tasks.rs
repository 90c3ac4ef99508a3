//! Task file management.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_TASK_FILE;

// Embed the sample task file as a string
const TASKS_TEMPLATE: &str = include_str!("../templates/tasks.json");

/// Task file management.
#[derive(Parser)]
pub struct TasksCommand {
    /// Tasks subcommand to execute.
    #[command(subcommand)]
    pub command: TasksSubcommands,
}

/// Tasks subcommands.
#[derive(Subcommand)]
pub enum TasksSubcommands {
    /// Writes a sample task file to start from.
    Init(InitCommand),
}

impl TasksCommand {
    /// Executes the tasks command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            TasksSubcommands::Init(init_cmd) => init_cmd.execute(),
        }
    }
}

/// Init command options.
#[derive(Parser)]
pub struct InitCommand {
    /// Where to write the sample task file.
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing task file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Executes the init command.
    pub fn execute(self) -> Result<()> {
        let path = self
            .path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE));

        if path.exists() && !self.force {
            anyhow::bail!(
                "Task file {} already exists. Use --force to overwrite it.",
                path.display()
            );
        }

        std::fs::write(&path, TASKS_TEMPLATE)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("✅ Generated {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_as_a_task_file() {
        let tasks: crate::data::TaskFile = serde_json::from_str(TASKS_TEMPLATE).unwrap();
        assert_eq!(tasks.today.len(), 2);
        assert_eq!(tasks.blockers.len(), 1);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        std::fs::write(&path, "{}").unwrap();

        let cmd = InitCommand {
            path: Some(path.clone()),
            force: false,
        };
        assert!(cmd.execute().is_err());

        let untouched = std::fs::read_to_string(&path).unwrap();
        assert_eq!(untouched, "{}");
    }

    #[test]
    fn init_writes_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let cmd = InitCommand {
            path: Some(path.clone()),
            force: false,
        };
        cmd.execute().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, TASKS_TEMPLATE);
    }
}
