use crate::errors::{AppError, AppResult};
use crate::ui::i18n::Language;
use crate::utils::path::expand_home;
use crate::utils::time::MINUTES_PER_DAY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A short alias mapping to a fixed task and, optionally, a default message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shorthand {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_project")]
    pub default_project: String,
    #[serde(default)]
    pub shorthands: BTreeMap<String, Shorthand>,
    /// Length of a full working day, used by `ww time`.
    #[serde(default = "default_workday_minutes")]
    pub workday_minutes: i64,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("logs")
        .to_string_lossy()
        .to_string()
}

fn default_project() -> String {
    "RND".to_string()
}

fn default_workday_minutes() -> i64 {
    8 * 60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            language: Language::default(),
            default_project: default_project(),
            shorthands: BTreeMap::new(),
            workday_minutes: default_workday_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wwork")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wwork.conf")
    }

    /// Load configuration from `path` (or the default location); a missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Config::default()
        };

        cfg.validated()
    }

    /// Directory holding the day log files, with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir)
    }

    /// Look a shorthand up, ignoring case.
    pub fn shorthand(&self, key: &str) -> Option<&Shorthand> {
        self.shorthands.get(&key.to_lowercase())
    }

    fn validated(mut self) -> AppResult<Self> {
        let project = self.default_project.trim();
        if project.is_empty() || !project.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::Config(format!(
                "default_project must be a non-empty alphanumeric code, got '{}'",
                self.default_project
            )));
        }
        self.default_project = project.to_uppercase();

        if !(1..=MINUTES_PER_DAY).contains(&self.workday_minutes) {
            return Err(AppError::Config(format!(
                "workday_minutes must be between 1 and {}, got {}",
                MINUTES_PER_DAY, self.workday_minutes
            )));
        }

        self.shorthands = self
            .shorthands
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();

        if let Some((key, _)) = self.shorthands.iter().find(|(_, s)| s.task.trim().is_empty()) {
            return Err(AppError::Config(format!("shorthand '{}' has an empty task", key)));
        }

        Ok(self)
    }
}
