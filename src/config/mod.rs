//! Settings loaded from $HOME/.standup-gen/settings.json.
//!
//! Every field is optional; CLI flags take precedence over the settings
//! file, which takes precedence over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::report::ReportWindow;

/// Default directory reports are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "standups";

/// Default task file path.
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// Default commit window in minutes (24 hours).
pub const DEFAULT_WINDOW_MINUTES: u64 = 1440;

/// User settings for standup-gen.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Directory reports are written to.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Path of the task file.
    #[serde(default)]
    pub task_file: Option<PathBuf>,

    /// Commit window in minutes.
    #[serde(default)]
    pub window_minutes: Option<u64>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    ///
    /// A missing file returns the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Loads settings, absorbing failures into the defaults with a warning.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Returns the default settings path.
    pub fn settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".standup-gen").join("settings.json"))
    }

    /// Resolves the output directory: flag, then settings, then default.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Resolves the task file path: flag, then settings, then default.
    pub fn task_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.task_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE))
    }

    /// Resolves the commit window from the CLI flags and settings.
    ///
    /// `--last` wins over any minute-based window; otherwise the flag, the
    /// settings file, and the built-in default apply in that order.
    pub fn window(&self, since_minutes: Option<u64>, last: Option<usize>) -> ReportWindow {
        if let Some(count) = last {
            return ReportWindow::Commits(count);
        }

        ReportWindow::Minutes(
            since_minutes
                .or(self.window_minutes)
                .unwrap_or(DEFAULT_WINDOW_MINUTES),
        )
    }
}
