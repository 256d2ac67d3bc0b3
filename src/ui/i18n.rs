//! User-facing texts in the configured language.
//!
//! The language comes from the loaded `Config` and is passed down
//! explicitly; there is no process-wide language state.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    StartWork,
    PauseStart,
    PauseEnd,
    FinishWork,
    NoMessage,
    DayStarted,
    TaskLogged,
    PauseEnabled,
    PauseDisabled,
    PauseDuration,
    DayEnded,
    Worked,
    Paused,
    OnPauseNow,
    Entries,
    File,
    Date,
    FileNotFound,
    NoLogForDay,
    SelectEntry,
    SelectAction,
    EnterTime,
    EnterTask,
    EnterMessage,
    Before,
    After,
    ConfirmChange,
    ConfirmDelete,
    ConfirmDeleteDay,
    ConfirmDeleteDayAgain,
    ShiftFollowing,
    Declined,
    Saved,
    DayDeleted,
    Removed,
    EarlierThanLast,
    Remaining,
    Overtime,
    CommitLogged,
}

pub fn text(lang: Language, msg: Msg) -> &'static str {
    match lang {
        Language::En => en(msg),
        Language::Ru => ru(msg),
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::StartWork => "Start of the work day",
        Msg::PauseStart => "Pause start",
        Msg::PauseEnd => "Pause end",
        Msg::FinishWork => "End of the work day",
        Msg::NoMessage => "(no message)",
        Msg::DayStarted => "Work day started. File created:",
        Msg::TaskLogged => "Task is logged ✓",
        Msg::PauseEnabled => "Pause is enabled. Go REST. Or EAT.",
        Msg::PauseDisabled => "Pause is disabled. Go WORK.",
        Msg::PauseDuration => "Pause duration is",
        Msg::DayEnded => "Day finally ended!",
        Msg::Worked => "Worked",
        Msg::Paused => "Paused",
        Msg::OnPauseNow => "On pause",
        Msg::Entries => "Entries",
        Msg::File => "File",
        Msg::Date => "Date",
        Msg::FileNotFound => "File not found. Create new one and start work day?",
        Msg::NoLogForDay => "No log for this day. Run `ww start` to begin.",
        Msg::SelectEntry => "Select entry",
        Msg::SelectAction => "Select action: [t]ime / tas[k] / [m]sg / [d]el",
        Msg::EnterTime => "New time (HHMM or HH:MM)",
        Msg::EnterTask => "New task (empty to clear)",
        Msg::EnterMessage => "New message (empty to clear)",
        Msg::Before => "before",
        Msg::After => "after",
        Msg::ConfirmChange => "Save this change?",
        Msg::ConfirmDelete => "Delete this entry?",
        Msg::ConfirmDeleteDay => {
            "This is the start of the day: the whole log file will be deleted. Continue?"
        }
        Msg::ConfirmDeleteDayAgain => "Are you really sure? This cannot be undone.",
        Msg::ShiftFollowing => "Following entries will be shifted by",
        Msg::Declined => "Declined, nothing changed.",
        Msg::Saved => "Saved.",
        Msg::DayDeleted => "Log file deleted:",
        Msg::Removed => "Removed entry:",
        Msg::EarlierThanLast => "Time is earlier than the last entry",
        Msg::Remaining => "Remaining",
        Msg::Overtime => "Overtime",
        Msg::CommitLogged => "Last commit is logged ✓",
    }
}

fn ru(msg: Msg) -> &'static str {
    match msg {
        Msg::StartWork => "Начало рабочего дня",
        Msg::PauseStart => "Начало перерыва",
        Msg::PauseEnd => "Конец перерыва",
        Msg::FinishWork => "Конец рабочего дня",
        Msg::NoMessage => "(без сообщения)",
        Msg::DayStarted => "Рабочий день начат. Создан файл:",
        Msg::TaskLogged => "Задача записана ✓",
        Msg::PauseEnabled => "Перерыв начат. Отдыхайте.",
        Msg::PauseDisabled => "Перерыв окончен. За работу.",
        Msg::PauseDuration => "Длительность перерыва",
        Msg::DayEnded => "Рабочий день окончен!",
        Msg::Worked => "Отработано",
        Msg::Paused => "Перерывы",
        Msg::OnPauseNow => "На перерыве",
        Msg::Entries => "Записей",
        Msg::File => "Файл",
        Msg::Date => "Дата",
        Msg::FileNotFound => "Файл не найден. Создать новый файл и начать рабочий день?",
        Msg::NoLogForDay => "За этот день записей нет. Выполните `ww start`.",
        Msg::SelectEntry => "Выберите запись",
        Msg::SelectAction => "Выберите действие: [t] время / [k] задача / [m] сообщение / [d] удалить",
        Msg::EnterTime => "Новое время (ЧЧММ или ЧЧ:ММ)",
        Msg::EnterTask => "Новая задача (пустая строка очищает)",
        Msg::EnterMessage => "Новое сообщение (пустая строка очищает)",
        Msg::Before => "было",
        Msg::After => "стало",
        Msg::ConfirmChange => "Сохранить изменение?",
        Msg::ConfirmDelete => "Удалить запись?",
        Msg::ConfirmDeleteDay => "Это начало дня: будет удалён весь файл. Продолжить?",
        Msg::ConfirmDeleteDayAgain => "Вы точно уверены? Это нельзя отменить.",
        Msg::ShiftFollowing => "Последующие записи будут сдвинуты на",
        Msg::Declined => "Отменено, ничего не изменено.",
        Msg::Saved => "Сохранено.",
        Msg::DayDeleted => "Файл удалён:",
        Msg::Removed => "Удалена запись:",
        Msg::EarlierThanLast => "Время раньше последней записи",
        Msg::Remaining => "Осталось",
        Msg::Overtime => "Переработка",
        Msg::CommitLogged => "Последний коммит записан ✓",
    }
}

/// Localized rendering of recoverable errors.
pub fn error_text(lang: Language, err: &AppError) -> String {
    match (lang, err) {
        (Language::En, AppError::OnPause) => "Looks like you forgot to unpause?".to_string(),
        (Language::En, AppError::LogFileAlreadyExists(date)) => {
            format!("Day {} already started! Go to work now ;)", date)
        }
        (Language::En, AppError::OneSymbolLog(_)) => {
            "Probably, you won't log a task with one symbol...".to_string()
        }
        (Language::En, AppError::EmptyLog) => {
            "The log has no entries yet: nothing to fill from or increment.".to_string()
        }
        (Language::En, _) => err.to_string(),
        (Language::Ru, AppError::CommandNotFound(c)) => format!("Команда не найдена: {}", c),
        (Language::Ru, AppError::LogFileMissing(date)) => {
            format!("Файл за {} не существует", date)
        }
        (Language::Ru, AppError::LogFileAlreadyExists(date)) => {
            format!("День {} уже начат!", date)
        }
        (Language::Ru, AppError::EmptyLog) => "В журнале ещё нет записей".to_string(),
        (Language::Ru, AppError::InvalidTimeFormat(t)) => {
            format!("Неверный формат времени: {}", t)
        }
        (Language::Ru, AppError::InvalidEntrySelection(s)) => {
            format!("Неверный номер записи: {}", s)
        }
        (Language::Ru, AppError::NotEditable(field)) => {
            format!("Поле «{}» можно менять только у записей задач", field)
        }
        (Language::Ru, AppError::FillTimeLocked) => {
            "Время записи типа fill нельзя изменить".to_string()
        }
        (Language::Ru, AppError::OnPause) => "Похоже, вы забыли закончить перерыв?".to_string(),
        (Language::Ru, AppError::DayFinished) => "Рабочий день уже окончен".to_string(),
        (Language::Ru, AppError::NothingToUndo) => "Нечего отменять".to_string(),
        (Language::Ru, AppError::OneSymbolLog(_)) => {
            "Вряд ли вы хотите записать задачу одним символом...".to_string()
        }
        (Language::Ru, AppError::Git(reason)) => {
            format!("Не удалось прочитать последний коммит: {}", reason)
        }
        (Language::Ru, _) => err.to_string(),
    }
}
