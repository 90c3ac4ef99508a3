//! Report commands — generate a standup file or preview it on stdout.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;

use crate::config::Settings;
use crate::data;
use crate::git;
use crate::report::{file_timestamp, write_report, Report};

/// Flags shared by the report-building commands.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Time window in minutes to scan for commits.
    #[arg(long, value_name = "MINUTES", conflicts_with = "last")]
    pub since_minutes: Option<u64>,

    /// Number of most recent commits to include instead of a time window.
    #[arg(long, value_name = "COUNT")]
    pub last: Option<usize>,

    /// Path of the task file.
    #[arg(long, value_name = "FILE")]
    pub task_file: Option<PathBuf>,

    /// Repository directory to read commits from.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,
}

impl ReportArgs {
    /// Builds a report from these flags, the user settings, and the given
    /// report time.
    ///
    /// Input failures never abort report generation: a missing repository
    /// yields no commits and a missing or malformed task file yields empty
    /// task lists.
    pub fn build_report(&self, settings: &Settings, now: DateTime<Local>) -> Report {
        let window = settings.window(self.since_minutes, self.last);
        let commits = git::recent_subjects(&self.repo, &window);
        let tasks = data::load_tasks_or_default(&settings.task_file(self.task_file.clone()));

        Report::new(now, window, commits, tasks)
    }
}

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Report-building flags.
    #[command(flatten)]
    pub args: ReportArgs,

    /// Directory where reports are written.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load_or_default();
        let now = Local::now();

        let report = self.args.build_report(&settings, now);
        let output_dir = settings.output_dir(self.output_dir);
        let path = write_report(&report, &output_dir, &file_timestamp(now))?;

        println!("✅ Standup generated: {}", path.display());
        Ok(())
    }
}

/// View command options.
#[derive(Parser)]
pub struct ViewCommand {
    /// Report-building flags.
    #[command(flatten)]
    pub args: ReportArgs,
}

impl ViewCommand {
    /// Executes the view command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load_or_default();
        let report = self.args.build_report(&settings, Local::now());

        print!("{}", report.render());
        Ok(())
    }
}
