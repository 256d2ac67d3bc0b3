use crate::errors::AppError;
use std::str::FromStr;

/// Closed set of commands the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// No tokens: show the day.
    Empty,
    /// Fallback when the first token is not a command word.
    Log,
    Start,
    Finish,
    Info,
    Edit,
    Undo,
    Pause,
    Help,
    /// Worked and remaining time of the working day.
    Time,
    /// Log the subject of the last git commit.
    From,
}

impl Command {
    /// Commands addressable by a keyword, in matching order.
    pub const VOCABULARY: [Command; 9] = [
        Command::Start,
        Command::Finish,
        Command::Info,
        Command::Edit,
        Command::Undo,
        Command::Pause,
        Command::Help,
        Command::Time,
        Command::From,
    ];

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Empty | Command::Log => None,
            Command::Start => Some("start"),
            Command::Finish => Some("finish"),
            Command::Info => Some("info"),
            Command::Edit => Some("edit"),
            Command::Undo => Some("undo"),
            Command::Pause => Some("pause"),
            Command::Help => Some("help"),
            Command::Time => Some("time"),
            Command::From => Some("from"),
        }
    }

    /// Extra full-word spellings.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Command::From => &["fc"],
            _ => &[],
        }
    }

    /// Commands whose tokens are plain arguments, not times or tasks.
    pub fn takes_arguments(&self) -> bool {
        matches!(self, Command::Help | Command::Time)
    }

    /// Match a token against the vocabulary: the full keyword, or a single
    /// character equal to the keyword's first letter.
    pub fn match_token(token: &str) -> Option<Command> {
        let token = token.to_lowercase();
        let single = token.chars().count() == 1;

        Self::VOCABULARY.into_iter().find(|cmd| {
            cmd.aliases().contains(&token.as_str())
                || cmd
                    .keyword()
                    .is_some_and(|kw| kw == token || (single && kw.starts_with(token.as_str())))
        })
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::match_token(s).ok_or_else(|| AppError::CommandNotFound(s.to_string()))
    }
}
