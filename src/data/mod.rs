//! Task file parsing and data model.
//!
//! The task file simulates an export from a task tracker: an optional
//! `today` array of task objects and an optional `blockers` array. JSON is
//! the default format; files with a `.yaml`/`.yml` extension parse as YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a task file.
#[derive(Error, Debug)]
pub enum TaskSourceError {
    /// The file exists but could not be read.
    #[error("Failed to read task file {path}: {source}")]
    Io {
        /// Path of the task file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file was read but could not be parsed as JSON.
    #[error("Failed to parse task file {path}: {source}")]
    Json {
        /// Path of the task file.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The file was read but could not be parsed as YAML.
    #[error("Failed to parse task file {path}: {source}")]
    Yaml {
        /// Path of the task file.
        path: String,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },
}

/// Tasks and blockers for today, as read from the task file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFile {
    /// Tasks planned for today.
    #[serde(default)]
    pub today: Vec<Task>,
    /// Current blockers.
    #[serde(default)]
    pub blockers: Vec<BlockerEntry>,
}

/// A single task entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Where the task came from (e.g. "Jira", "Teams").
    #[serde(default = "default_source")]
    pub source: String,
    /// Task title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Raw status string as exported by the tracker.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_source() -> String {
    "Unknown".to_string()
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_status() -> String {
    "ToDo".to_string()
}

impl Task {
    /// Convenience constructor.
    pub fn new(source: &str, title: &str, status: &str) -> Self {
        Self {
            source: source.to_string(),
            title: title.to_string(),
            status: status.to_string(),
        }
    }
}

/// A single blocker entry.
///
/// Entries are usually objects with a `reason`, but bare strings are
/// accepted and anything else degrades to a stringified fallback instead of
/// failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockerEntry {
    /// Structured entry with an explicit reason.
    Detailed {
        /// Why the work is blocked.
        reason: String,
    },
    /// Bare string entry.
    Text(String),
    /// Malformed entry kept as its raw value.
    Raw(serde_json::Value),
}

impl BlockerEntry {
    /// Returns the human-readable reason for this blocker.
    pub fn reason(&self) -> String {
        match self {
            BlockerEntry::Detailed { reason } => reason.clone(),
            BlockerEntry::Text(text) => text.clone(),
            BlockerEntry::Raw(value) => match value {
                serde_json::Value::Object(_) => "Unknown blocker".to_string(),
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            },
        }
    }
}

/// Loads a task file, choosing the parser by file extension.
///
/// Missing `today`/`blockers` fields default to empty lists. A missing file
/// is an `Io` error; callers that want the silent empty default should use
/// [`load_tasks_or_default`].
pub fn load_tasks(path: &Path) -> Result<TaskFile, TaskSourceError> {
    let content = fs::read_to_string(path).map_err(|source| TaskSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|source| TaskSourceError::Yaml {
            path: path.display().to_string(),
            source,
        })
    } else {
        serde_json::from_str(&content).map_err(|source| TaskSourceError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Loads a task file, absorbing every failure into the empty default.
///
/// A file that simply does not exist is expected and logged at debug level;
/// anything else gets a warning so a malformed file is not mistaken for an
/// empty day.
pub fn load_tasks_or_default(path: &Path) -> TaskFile {
    if !path.exists() {
        debug!(path = %path.display(), "task file not found, using defaults");
        return TaskFile::default();
    }

    match load_tasks(path) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to load task file, using defaults");
            TaskFile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_well_formed_json() {
        let (_dir, path) = write_temp(
            "tasks.json",
            r#"{
                "today": [
                    {"source": "Jira", "title": "Implement standup generator", "status": "In Progress"},
                    {"source": "Teams", "title": "Refactor commit parsing logic", "status": "Done"}
                ],
                "blockers": [
                    {"reason": "Waiting for code review approval"}
                ]
            }"#,
        );

        let tasks = load_tasks(&path).unwrap();
        assert_eq!(tasks.today.len(), 2);
        assert_eq!(tasks.today[0].source, "Jira");
        assert_eq!(tasks.blockers.len(), 1);
        assert_eq!(tasks.blockers[0].reason(), "Waiting for code review approval");
    }

    #[test]
    fn loads_yaml_by_extension() {
        let (_dir, path) = write_temp(
            "tasks.yaml",
            "today:\n  - source: Jira\n    title: Ship release\n    status: doing\nblockers: []\n",
        );

        let tasks = load_tasks(&path).unwrap();
        assert_eq!(tasks.today.len(), 1);
        assert_eq!(tasks.today[0].title, "Ship release");
    }

    #[test]
    fn missing_fields_default_to_empty_lists() {
        let (_dir, path) = write_temp("tasks.json", "{}");
        let tasks = load_tasks(&path).unwrap();
        assert!(tasks.today.is_empty());
        assert!(tasks.blockers.is_empty());
    }

    #[test]
    fn task_fields_have_defaults() {
        let (_dir, path) = write_temp("tasks.json", r#"{"today": [{}]}"#);
        let tasks = load_tasks(&path).unwrap();
        assert_eq!(tasks.today[0].source, "Unknown");
        assert_eq!(tasks.today[0].title, "Untitled");
        assert_eq!(tasks.today[0].status, "ToDo");
    }

    #[test]
    fn blocker_entries_degrade_gracefully() {
        let (_dir, path) = write_temp(
            "tasks.json",
            r#"{"blockers": [
                {"reason": "Waiting on infra"},
                "plain string blocker",
                {"note": "object without reason"},
                42
            ]}"#,
        );

        let tasks = load_tasks(&path).unwrap();
        let reasons: Vec<String> = tasks.blockers.iter().map(BlockerEntry::reason).collect();
        assert_eq!(
            reasons,
            vec![
                "Waiting on infra".to_string(),
                "plain string blocker".to_string(),
                "Unknown blocker".to_string(),
                "42".to_string(),
            ]
        );
    }

    #[test]
    fn missing_file_is_absorbed_into_default() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = load_tasks_or_default(&dir.path().join("nope.json"));
        assert!(tasks.today.is_empty());
        assert!(tasks.blockers.is_empty());
    }

    #[test]
    fn malformed_file_is_absorbed_into_default() {
        let (_dir, path) = write_temp("tasks.json", "{ not json");
        assert!(load_tasks(&path).is_err());

        let tasks = load_tasks_or_default(&path);
        assert!(tasks.today.is_empty());
    }
}
