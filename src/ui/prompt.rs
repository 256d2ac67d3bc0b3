//! Blocking console prompts.
//!
//! Interactive flows talk to a `Prompter` so they can be driven by stdin in
//! the binary and by scripted answers in tests.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

pub trait Prompter {
    /// Ask a free-text question. `None` means input is exhausted.
    fn ask(&mut self, question: &str) -> AppResult<Option<String>>;

    /// Yes/no question; end of input counts as "no".
    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.ask(&format!("{} [y/n]", question))?;
        Ok(answer.as_deref().is_some_and(is_yes))
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "1" | "д" | "да"
    )
}

/// Reads answers from the terminal.
pub struct StdinPrompter;

impl StdinPrompter {
    fn read_line() -> AppResult<Option<String>> {
        let mut s = String::new();
        if io::stdin().read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        print!("\n{}\n>>> ", question);
        io::stdout().flush()?;
        Self::read_line()
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        warning(question);
        print!("Confirm [y/N]: ");
        io::stdout().flush()?;
        Ok(Self::read_line()?.as_deref().is_some_and(is_yes))
    }
}
