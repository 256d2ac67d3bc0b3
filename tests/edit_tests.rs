mod common;
use common::{ScriptedPrompter, TODAY, date, entry, sample_log, t, task_entry, test_config, times};
use std::fs;
use tempfile::TempDir;
use wwork::core::edit::{EditAction, EditEngine, EditOutcome, EditSession, parse_selection};
use wwork::errors::AppError;
use wwork::models::{DayLog, Entry, EntryKind, LogType, TaskRef};
use wwork::store::LogStore;

/// Runs an edit session over `log` with scripted answers.
fn run_session(
    dir: &TempDir,
    log: &mut DayLog,
    answers: &[&str],
) -> (EditOutcome, ScriptedPrompter) {
    let cfg = test_config(dir.path());
    let store = LogStore::new(dir.path());
    let mut prompter = ScriptedPrompter::new(answers);
    let outcome = EditSession {
        store: &store,
        cfg: &cfg,
        prompter: &mut prompter,
    }
    .run(log)
    .unwrap();
    (outcome, prompter)
}

fn fill_log() -> DayLog {
    DayLog::with_entries(
        date(TODAY),
        vec![
            entry(EntryKind::Start, "09:00"),
            task_entry("09:30", "RND-1", "standup"),
            Entry::log(t("09:30"), LogType::Fill, Some(TaskRef::new("RND-2")), None),
            task_entry("10:00", "RND-3", "deploy"),
        ],
    )
}

#[test]
fn test_time_edit_shifts_following_entries() {
    let dir = TempDir::new().unwrap();
    let mut log = sample_log();

    let (outcome, prompter) = run_session(&dir, &mut log, &["2", "t", "0940", "y"]);

    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(prompter.remaining(), 0);
    assert_eq!(
        times(&log),
        vec!["09:00", "09:40", "10:25", "12:10", "12:55", "14:10"]
    );

    let stored = LogStore::new(dir.path()).load(date(TODAY)).unwrap();
    assert_eq!(stored, log);
}

#[test]
fn test_time_edit_back_restores_original() {
    let dir = TempDir::new().unwrap();
    let original = sample_log();
    let mut log = original.clone();

    run_session(&dir, &mut log, &["3", "time", "1100", "y"]);
    assert_eq!(times(&log)[..2], times(&original)[..2]);
    assert_ne!(log, original);

    run_session(&dir, &mut log, &["3", "time", "10:15", "y"]);
    assert_eq!(log, original);
}

#[test]
fn test_time_edit_of_last_entry_does_not_shift() {
    let log = sample_log();
    let proposal = EditEngine::propose(&log, 5, EditAction::Time(t("15:00"))).unwrap();
    assert_eq!(proposal.shift, None);
    assert_eq!(proposal.after.unwrap().time, t("15:00"));
}

#[test]
fn test_delete_shifts_by_gap_to_previous() {
    let mut log = sample_log();
    let proposal = EditEngine::propose(&log, 2, EditAction::Delete).unwrap();
    assert_eq!(proposal.shift, Some(-45));
    assert!(!proposal.terminates_day);

    EditEngine::apply(&mut log, &proposal).unwrap();
    assert_eq!(times(&log), vec!["09:00", "09:30", "11:15", "12:00", "13:15"]);
}

#[test]
fn test_delete_last_entry() {
    let dir = TempDir::new().unwrap();
    let mut log = sample_log();

    let (outcome, _) = run_session(&dir, &mut log, &["6", "d", "y"]);

    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(log.len(), 5);
    assert_eq!(log.last().unwrap().kind, EntryKind::Resume);
}

#[test]
fn test_fill_entries_keep_their_time() {
    let mut log = fill_log();
    let proposal = EditEngine::propose(&log, 1, EditAction::Time(t("09:40"))).unwrap();
    assert_eq!(proposal.shift, Some(10));

    EditEngine::apply(&mut log, &proposal).unwrap();
    assert_eq!(times(&log), vec!["09:00", "09:40", "09:30", "10:10"]);
}

#[test]
fn test_fill_time_is_locked() {
    let log = fill_log();
    let err = EditEngine::propose(&log, 2, EditAction::Time(t("09:45"))).unwrap_err();
    assert!(matches!(err, AppError::FillTimeLocked));

    // the task of a fill entry can still change
    let proposal =
        EditEngine::propose(&log, 2, EditAction::Task(Some(TaskRef::new("RND-9")))).unwrap();
    assert_eq!(proposal.after.unwrap().task_str(), Some("RND-9"));
}

#[test]
fn test_task_and_message_only_on_log_entries() {
    let log = sample_log();
    assert!(matches!(
        EditEngine::propose(&log, 3, EditAction::Task(None)),
        Err(AppError::NotEditable("task"))
    ));
    assert!(matches!(
        EditEngine::propose(&log, 0, EditAction::Message(Some("x".into()))),
        Err(AppError::NotEditable("message"))
    ));
}

#[test]
fn test_task_and_message_edit() {
    let dir = TempDir::new().unwrap();
    let mut log = sample_log();

    run_session(&dir, &mut log, &["2", "k", "77", "y"]);
    assert_eq!(log.entries[1].task_str(), Some("RND-77"));

    run_session(&dir, &mut log, &["2", "k", "lunch with team", "y"]);
    assert_eq!(log.entries[1].task_str(), Some("lunch with team"));

    run_session(&dir, &mut log, &["3", "m", "  code review  ", "y"]);
    assert_eq!(log.entries[2].message.as_deref(), Some("code review"));

    run_session(&dir, &mut log, &["3", "m", "", "y"]);
    assert_eq!(log.entries[2].message, None);
    assert_eq!(times(&log), times(&sample_log()));
}

#[test]
fn test_declined_edit_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    let original = sample_log();
    store.save(&original).unwrap();
    let before = fs::read(store.path_for(original.date)).unwrap();

    let mut log = original.clone();
    let (outcome, _) = run_session(&dir, &mut log, &["2", "t", "0940", "n"]);

    assert_eq!(outcome, EditOutcome::Declined);
    assert_eq!(log, original);
    assert_eq!(fs::read(store.path_for(original.date)).unwrap(), before);
}

#[test]
fn test_end_of_input_declines() {
    let dir = TempDir::new().unwrap();
    for script in [&[][..], &["2"][..], &["2", "t"][..], &["2", "t", "0940"][..]] {
        let mut log = sample_log();
        let (outcome, _) = run_session(&dir, &mut log, script);
        assert_eq!(outcome, EditOutcome::Declined);
        assert_eq!(log, sample_log());
    }
    assert!(!LogStore::new(dir.path()).exists(date(TODAY)));
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let dir = TempDir::new().unwrap();
    let mut log = sample_log();

    let (outcome, prompter) = run_session(
        &dir,
        &mut log,
        &["9", "abc", "2", "x", "t", "25:99", "0940", "y"],
    );

    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(prompter.remaining(), 0);
    assert_eq!(prompter.questions.len(), 8);
    assert_eq!(log.entries[1].time, t("09:40"));
}

#[test]
fn test_not_editable_field_is_asked_again() {
    let dir = TempDir::new().unwrap();
    let mut log = sample_log();

    let (outcome, _) = run_session(&dir, &mut log, &["4", "k", "m", "t", "1205", "y"]);

    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(
        times(&log),
        vec!["09:00", "09:30", "10:15", "12:05", "12:50", "14:05"]
    );
}

#[test]
fn test_deleting_start_terminates_day() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    let mut log = sample_log();
    store.save(&log).unwrap();

    let (outcome, _) = run_session(&dir, &mut log, &["1", "d", "y", "y"]);

    assert_eq!(outcome, EditOutcome::Terminated);
    assert!(!store.exists(date(TODAY)));
}

#[test]
fn test_deleting_start_needs_second_confirmation() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path());
    let mut log = sample_log();
    store.save(&log).unwrap();

    let (outcome, _) = run_session(&dir, &mut log, &["1", "d", "y", "n"]);

    assert_eq!(outcome, EditOutcome::Declined);
    assert!(store.exists(date(TODAY)));
    assert_eq!(log, sample_log());
}

#[test]
fn test_parse_selection_is_one_based() {
    assert_eq!(parse_selection("1", 3).unwrap(), 0);
    assert_eq!(parse_selection(" 3 ", 3).unwrap(), 2);
    assert!(matches!(
        parse_selection("0", 3),
        Err(AppError::InvalidEntrySelection(_))
    ));
    assert!(parse_selection("4", 3).is_err());
    assert!(parse_selection("two", 3).is_err());
}
