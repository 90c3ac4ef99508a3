//! Commit subject classification and task status normalization.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Conventional commit categories recognized in commit subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitCategory {
    /// Documentation changes.
    Docs,
    /// Test additions or changes.
    Test,
    /// Code restructuring without behavior change.
    Refactor,
    /// New features.
    Feat,
    /// Bug fixes.
    Fix,
    /// Maintenance work.
    Chore,
    /// Performance improvements.
    Perf,
    /// Formatting-only changes.
    Style,
    /// Anything that does not carry a recognized prefix.
    Other,
}

/// Category display order used in summary breakdowns.
pub const DISPLAY_ORDER: [CommitCategory; 9] = [
    CommitCategory::Docs,
    CommitCategory::Test,
    CommitCategory::Refactor,
    CommitCategory::Feat,
    CommitCategory::Fix,
    CommitCategory::Chore,
    CommitCategory::Perf,
    CommitCategory::Style,
    CommitCategory::Other,
];

impl CommitCategory {
    /// Returns the lowercase token for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            CommitCategory::Docs => "docs",
            CommitCategory::Test => "test",
            CommitCategory::Refactor => "refactor",
            CommitCategory::Feat => "feat",
            CommitCategory::Fix => "fix",
            CommitCategory::Chore => "chore",
            CommitCategory::Perf => "perf",
            CommitCategory::Style => "style",
            CommitCategory::Other => "other",
        }
    }
}

impl fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading conventional-commit token, with optional scope and breaking marker
/// (e.g. "feat:", "fix(parser):", "refactor!:").
static SUBJECT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<type>[A-Za-z]+)(?:\([^)]*\))?!?:").unwrap());

/// Classifies a commit subject by its conventional-commit prefix.
///
/// Matching is case-insensitive; subjects without a recognized prefix
/// classify as [`CommitCategory::Other`].
pub fn classify_subject(subject: &str) -> CommitCategory {
    let Some(caps) = SUBJECT_PREFIX.captures(subject.trim()) else {
        return CommitCategory::Other;
    };

    match caps["type"].to_lowercase().as_str() {
        "docs" => CommitCategory::Docs,
        "test" => CommitCategory::Test,
        "refactor" => CommitCategory::Refactor,
        "feat" => CommitCategory::Feat,
        "fix" => CommitCategory::Fix,
        "chore" => CommitCategory::Chore,
        "perf" => CommitCategory::Perf,
        "style" => CommitCategory::Style,
        _ => CommitCategory::Other,
    }
}

/// Canonical task status, normalized from the free-form strings task trackers
/// export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Not started yet.
    Todo,
    /// Actively being worked on.
    InProgress,
    /// Finished.
    Done,
    /// Unrecognized status, passed through verbatim.
    Other(String),
}

impl TaskStatus {
    /// Normalizes a raw status string to a canonical status.
    ///
    /// Unrecognized statuses pass through verbatim (trimmed) rather than
    /// being rejected.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "in progress" | "in_progress" | "doing" => TaskStatus::InProgress,
            "done" | "completed" => TaskStatus::Done,
            "todo" | "to do" | "backlog" | "open" => TaskStatus::Todo,
            _ => TaskStatus::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => f.write_str("todo"),
            TaskStatus::InProgress => f.write_str("in_progress"),
            TaskStatus::Done => f.write_str("done"),
            TaskStatus::Other(raw) => f.write_str(raw),
        }
    }
}
