//! Report assembly: window selection, section formatting, and file output.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::data::TaskFile;

pub mod classify;
pub mod summary;

pub use classify::{classify_subject, CommitCategory, TaskStatus, DISPLAY_ORDER};
pub use summary::{category_breakdown, summary_lines, TaskSnapshot};

/// Commit-selection rule for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportWindow {
    /// Commits from the last N minutes.
    Minutes(u64),
    /// The last N commits regardless of age.
    Commits(usize),
}

impl ReportWindow {
    /// Human-readable label used in section headers and summary lines.
    pub fn label(&self) -> String {
        match self {
            ReportWindow::Minutes(minutes) => format!("last {minutes} minutes"),
            ReportWindow::Commits(count) => format!("last {count} commits"),
        }
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A fully assembled standup report, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    /// Date shown in the title, formatted YYYY-MM-DD.
    pub date_label: String,
    /// Commit-selection rule the commits were gathered with.
    pub window: ReportWindow,
    /// Commit subjects, newest first.
    pub commits: Vec<String>,
    /// Tasks and blockers read from the task file.
    pub tasks: TaskFile,
}

impl Report {
    /// Assembles a report from its inputs, stamping it with the given time.
    pub fn new(
        now: DateTime<Local>,
        window: ReportWindow,
        commits: Vec<String>,
        tasks: TaskFile,
    ) -> Self {
        Self {
            date_label: now.format("%Y-%m-%d").to_string(),
            window,
            commits,
            tasks,
        }
    }

    /// Renders the report as a Markdown document.
    ///
    /// The five section headers always appear, in fixed order; empty sections
    /// show a placeholder bullet instead.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# Daily Standup ({})", self.date_label));
        lines.push(String::new());

        lines.push(format!("## Recent work ({})", self.window.label()));
        if self.commits.is_empty() {
            lines.push("- No commits found".to_string());
        } else {
            for subject in &self.commits {
                lines.push(format!("- {subject}"));
            }
        }
        lines.push(String::new());

        lines.push("## AI Summary".to_string());
        lines.extend(summary_lines(&self.commits, &self.tasks, &self.window));
        lines.push(String::new());

        lines.push("## Today".to_string());
        if self.tasks.today.is_empty() {
            lines.push("- No planned tasks".to_string());
        } else {
            for task in &self.tasks.today {
                lines.push(format!("- [{}] {} ({})", task.source, task.title, task.status));
            }
        }
        lines.push(String::new());

        lines.push("## Blockers".to_string());
        if self.tasks.blockers.is_empty() {
            lines.push("- None".to_string());
        } else {
            for blocker in &self.tasks.blockers {
                lines.push(format!("- {}", blocker.reason()));
            }
        }

        let mut document = lines.join("\n");
        document.push('\n');
        document
    }
}

/// Writes a rendered report into `output_dir`, named with the given
/// timestamp (e.g. `standup-2026-08-05_09-30.md`).
///
/// Creates the output directory if it does not exist yet. Returns the path
/// of the written file.
pub fn write_report(report: &Report, output_dir: &Path, timestamp: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(format!("standup-{timestamp}.md"));
    fs::write(&path, report.render())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    Ok(path)
}

/// Formats a timestamp for report filenames.
pub fn file_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M").to_string()
}
