pub mod i18n;
pub mod messages;
pub mod prompt;
pub mod render;
