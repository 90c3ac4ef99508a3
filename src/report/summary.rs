//! Commit and task tallies for the summary section.

use std::collections::HashMap;

use crate::data::TaskFile;
use crate::report::classify::{classify_subject, CommitCategory, TaskStatus, DISPLAY_ORDER};
use crate::report::ReportWindow;

/// Counts of tasks per canonical status plus the blocker count.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    /// Tasks not started yet.
    pub todo: usize,
    /// Tasks being worked on.
    pub in_progress: usize,
    /// Finished tasks.
    pub done: usize,
    /// Number of blocker entries.
    pub blockers: usize,
}

impl TaskSnapshot {
    /// Tallies the tasks and blockers in a task file.
    ///
    /// Tasks with an unrecognized status count toward no bucket.
    pub fn tally(tasks: &TaskFile) -> Self {
        let mut snapshot = TaskSnapshot {
            blockers: tasks.blockers.len(),
            ..TaskSnapshot::default()
        };

        for task in &tasks.today {
            match TaskStatus::parse(&task.status) {
                TaskStatus::Todo => snapshot.todo += 1,
                TaskStatus::InProgress => snapshot.in_progress += 1,
                TaskStatus::Done => snapshot.done += 1,
                TaskStatus::Other(_) => {}
            }
        }

        snapshot
    }
}

/// Renders per-category commit counts in display order, omitting zero counts
/// (e.g. "feat=1, fix=2").
pub fn category_breakdown(commits: &[String]) -> String {
    let mut counts: HashMap<CommitCategory, usize> = HashMap::new();
    for subject in commits {
        *counts.entry(classify_subject(subject)).or_insert(0) += 1;
    }

    DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            counts
                .get(category)
                .filter(|&&count| count > 0)
                .map(|count| format!("{category}={count}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the bullet lines for the summary section: a commit-count line and a
/// task-snapshot line.
pub fn summary_lines(commits: &[String], tasks: &TaskFile, window: &ReportWindow) -> Vec<String> {
    let snapshot = TaskSnapshot::tally(tasks);
    let snapshot_line = format!(
        "- Tasks snapshot: {} ToDo, {} In Progress, {} Done; blockers: {}.",
        snapshot.todo, snapshot.in_progress, snapshot.done, snapshot.blockers
    );

    if commits.is_empty() {
        return vec![
            format!("- 0 commit(s) in {}.", window.label()),
            snapshot_line,
        ];
    }

    vec![
        format!(
            "- {} commit(s) in {} ({}).",
            commits.len(),
            window.label(),
            category_breakdown(commits)
        ),
        snapshot_line,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Task;

    fn subjects(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn breakdown_counts_by_category_in_display_order() {
        let commits = subjects(&[
            "fix: one",
            "feat: two",
            "fix: three",
            "chore: bump deps",
        ]);
        assert_eq!(category_breakdown(&commits), "feat=1, fix=2, chore=1");
    }

    #[test]
    fn breakdown_omits_zero_counts() {
        let commits = subjects(&["feat: only features here"]);
        assert_eq!(category_breakdown(&commits), "feat=1");
    }

    #[test]
    fn breakdown_unrecognized_subjects_fall_into_other() {
        let commits = subjects(&["update stuff", "feat: real work"]);
        assert_eq!(category_breakdown(&commits), "feat=1, other=1");
    }

    #[test]
    fn snapshot_tallies_normalized_statuses() {
        let tasks = TaskFile {
            today: vec![
                Task::new("Jira", "Implement generator", "In Progress"),
                Task::new("Jira", "Review PR", "Done"),
                Task::new("Teams", "Plan sprint", "Backlog"),
                Task::new("Teams", "Mystery work", "Waiting on QA"),
            ],
            blockers: Vec::new(),
        };

        let snapshot = TaskSnapshot::tally(&tasks);
        assert_eq!(snapshot.todo, 1);
        assert_eq!(snapshot.in_progress, 1);
        assert_eq!(snapshot.done, 1);
        assert_eq!(snapshot.blockers, 0);
    }

    #[test]
    fn summary_with_no_commits_still_reports_snapshot() {
        let tasks = TaskFile::default();
        let lines = summary_lines(&[], &tasks, &ReportWindow::Minutes(90));
        assert_eq!(
            lines,
            vec![
                "- 0 commit(s) in last 90 minutes.".to_string(),
                "- Tasks snapshot: 0 ToDo, 0 In Progress, 0 Done; blockers: 0.".to_string(),
            ]
        );
    }

    #[test]
    fn summary_includes_breakdown_when_commits_exist() {
        let commits = subjects(&["feat: a", "fix: b", "fix: c"]);
        let lines = summary_lines(&commits, &TaskFile::default(), &ReportWindow::Commits(10));
        assert_eq!(
            lines[0],
            "- 3 commit(s) in last 10 commits (feat=1, fix=2)."
        );
    }
}
