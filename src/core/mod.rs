pub mod command_parser;
pub mod edit;
pub mod summary;
pub mod time_resolver;
