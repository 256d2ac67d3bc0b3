mod common;
use common::{TODAY, date, sample_log, t};
use std::fs;
use tempfile::TempDir;
use wwork::errors::AppError;
use wwork::models::{DayLog, Entry, EntryKind, LogType, TaskRef};
use wwork::store::{LogStore, format};

#[test]
fn test_missing_file_loads_empty_log() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());

    assert!(!store.exists(date(TODAY)));
    let log = store.load(date(TODAY)).unwrap();
    assert!(log.is_empty());
    assert_eq!(log.date, date(TODAY));
}

#[test]
fn test_save_load_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path().join("nested").join("logs"));
    let log = sample_log();

    store.save(&log).unwrap();
    let first = fs::read(store.path_for(log.date)).unwrap();

    let loaded = store.load(log.date).unwrap();
    assert_eq!(loaded, log);

    store.save(&loaded).unwrap();
    let second = fs::read(store.path_for(log.date)).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.load(log.date).unwrap().entries, log.entries);
}

#[test]
fn test_save_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    store.save(&sample_log()).unwrap();
    store.save(&sample_log()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec![format!("{}.json", TODAY)]);
}

#[test]
fn test_terminate_removes_file() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    store.save(&sample_log()).unwrap();
    assert!(store.exists(date(TODAY)));

    store.terminate(date(TODAY)).unwrap();
    assert!(!store.exists(date(TODAY)));

    // terminating twice is harmless
    store.terminate(date(TODAY)).unwrap();
}

#[test]
fn test_file_layout_is_versioned_json() {
    let log = DayLog::with_entries(
        date(TODAY),
        vec![
            Entry::new(EntryKind::Start, t("09:00"), LogType::Current),
            Entry::log(
                t("09:30"),
                LogType::Exact,
                Some(TaskRef::new("RND-77")),
                Some("deploy".into()),
            ),
        ],
    );
    let raw = format::encode(&log).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["version"], 1);
    assert_eq!(value["date"], TODAY);
    assert_eq!(value["entries"][0]["kind"], "start");
    assert_eq!(value["entries"][0]["time"], "09:00");
    assert!(value["entries"][0].get("task").is_none());
    assert_eq!(value["entries"][1]["log_type"], "exact");
    assert_eq!(value["entries"][1]["task"], "RND-77");
    assert_eq!(value["entries"][1]["message"], "deploy");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let raw = r#"{"version":1,"date":"2026-10-16","comment":"x","entries":[
        {"kind":"start","time":"08:00","log_type":"current","color":"green"}]}"#;
    let log = format::decode(raw).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries[0].time, t("08:00"));
}

#[test]
fn test_newer_version_is_rejected() {
    let raw = r#"{"version":7,"date":"2026-10-16","entries":[]}"#;
    let err = format::decode(raw).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat { found: 7, .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_corrupt_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    fs::write(store.path_for(date(TODAY)), "{ not json").unwrap();

    let err = store.load(date(TODAY)).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_day_log_mutations() {
    let mut log = sample_log();
    assert_eq!(log.max_task_length(), 5);

    let old = log
        .replace(1, Entry::log(t("09:35"), LogType::Exact, Some(TaskRef::new("PROJECT-100")), None))
        .unwrap();
    assert_eq!(old.task, Some(TaskRef::new("RND-1")));
    assert_eq!(log.max_task_length(), 11);

    let removed = log.delete(2).unwrap();
    assert_eq!(removed.task_str(), Some("RND-2"));
    assert_eq!(log.len(), 5);

    assert!(matches!(log.delete(9), Err(AppError::InvalidEntrySelection(_))));
}
