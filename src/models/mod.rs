pub mod command;
pub mod day_log;
pub mod entry;
pub mod entry_kind;
pub mod log_type;
pub mod task_ref;

pub use command::Command;
pub use day_log::DayLog;
pub use entry::Entry;
pub use entry_kind::EntryKind;
pub use log_type::LogType;
pub use task_ref::TaskRef;
