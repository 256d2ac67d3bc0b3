//! Reading the last commit of the repository around the working directory.

use crate::errors::{AppError, AppResult};
use std::process::{Command, Stdio};

/// Subject line of `HEAD` in the current directory's repository.
pub fn last_commit_subject() -> AppResult<String> {
    let output = Command::new("git")
        .args(["log", "-1", "--format=%s"])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| AppError::Git(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.lines().next().unwrap_or("git log failed").trim();
        return Err(AppError::Git(reason.to_string()));
    }

    let subject = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if subject.is_empty() {
        return Err(AppError::Git("empty commit subject".to_string()));
    }
    tracing::debug!(%subject, "read last commit");
    Ok(subject)
}

/// Subjects are usually written without a final full stop; add one.
pub fn as_sentence(subject: &str) -> String {
    let subject = subject.trim();
    if subject.ends_with(['.', '!', '?', ')', '(']) {
        subject.to_string()
    } else {
        format!("{}.", subject)
    }
}
