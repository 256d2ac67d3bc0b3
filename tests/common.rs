#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wwork::config::{Config, Shorthand};
use wwork::errors::AppResult;
use wwork::models::{DayLog, Entry, EntryKind, LogType, TaskRef};
use wwork::ui::i18n::Language;
use wwork::ui::prompt::Prompter;

pub const TODAY: &str = "2026-10-16";

pub fn ww() -> Command {
    cargo_bin_cmd!("ww")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// Config pointing at `data_dir`, with the `st` standup shorthand.
pub fn test_config(data_dir: &Path) -> Config {
    let mut shorthands = BTreeMap::new();
    shorthands.insert(
        "st".to_string(),
        Shorthand {
            task: "RND-8".to_string(),
            message: Some("[STANDUP]".to_string()),
        },
    );
    shorthands.insert(
        "mail".to_string(),
        Shorthand {
            task: "OPS-1".to_string(),
            message: None,
        },
    );
    Config {
        data_dir: data_dir.to_string_lossy().to_string(),
        language: Language::En,
        default_project: "RND".to_string(),
        shorthands,
        workday_minutes: 8 * 60,
    }
}

/// Sandbox for binary runs: a data dir plus a config file using it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let cfg = test_config(&dir.path().join("logs"));
        fs::write(
            dir.path().join("wwork.conf"),
            serde_yaml::to_string(&cfg).expect("yaml"),
        )
        .expect("write config");
        Self { dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("logs")
    }

    pub fn log_path(&self, day: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", day))
    }

    /// `ww` with the sandbox config and a pinned clock.
    pub fn cmd(&self, at: &str) -> Command {
        let mut cmd = ww();
        cmd.env_remove("WWORK_DATA_DIR")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("wwork.conf"))
            .arg("--at")
            .arg(at);
        cmd
    }

    pub fn load(&self, day: &str) -> DayLog {
        let raw = fs::read_to_string(self.log_path(day)).expect("log file");
        wwork::store::format::decode(&raw).expect("decode")
    }
}

/// Answers prompts from a fixed script; `None` once it runs out.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

pub fn entry(kind: EntryKind, time: &str) -> Entry {
    Entry::new(kind, t(time), LogType::Current)
}

pub fn task_entry(time: &str, task: &str, message: &str) -> Entry {
    Entry::log(
        t(time),
        LogType::Exact,
        Some(TaskRef::new(task)),
        Some(message.to_string()),
    )
}

/// START 09:00, three task entries, a pause and a resume.
pub fn sample_log() -> DayLog {
    DayLog::with_entries(
        date(TODAY),
        vec![
            entry(EntryKind::Start, "09:00"),
            task_entry("09:30", "RND-1", "standup"),
            task_entry("10:15", "RND-2", "review"),
            entry(EntryKind::Pause, "12:00"),
            entry(EntryKind::Resume, "12:45"),
            task_entry("14:00", "RND-3", "deploy"),
        ],
    )
}

pub fn times(log: &DayLog) -> Vec<String> {
    log.entries.iter().map(|e| e.time_str()).collect()
}
