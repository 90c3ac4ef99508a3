//! Git operations: repository detection and commit subject listing.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use git2::Repository;
use tracing::{debug, warn};

use crate::report::ReportWindow;

/// Checks that `dir` is inside a git repository.
pub fn check_git_repo(dir: &Path) -> Result<()> {
    Repository::open(dir).context("Not in a git repository")?;
    Ok(())
}

/// Lists commit subject lines for the given window, newest first.
///
/// Shells out to `git log` and absorbs every failure into an empty list: a
/// missing repository, a missing `git` binary, and a nonzero exit (e.g. a
/// repository with no commits yet) all yield no subjects. Lines are trimmed
/// and empty ones dropped.
pub fn recent_subjects(dir: &Path, window: &ReportWindow) -> Vec<String> {
    if let Err(err) = check_git_repo(dir) {
        debug!(dir = %dir.display(), error = %err, "skipping commit collection");
        return Vec::new();
    }

    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir).arg("log").arg("--pretty=format:%s");
    match window {
        ReportWindow::Minutes(minutes) => {
            cmd.arg(format!("--since={minutes} minutes ago"));
        }
        ReportWindow::Commits(count) => {
            cmd.arg("-n").arg(count.to_string());
        }
    }

    let output = match cmd.output() {
        Ok(output) => output,
        Err(err) => {
            warn!(error = %err, "failed to invoke git");
            return Vec::new();
        }
    };

    if !output.status.success() {
        warn!(
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "git log failed"
        );
        return Vec::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
