use serde::{Deserialize, Serialize};
use std::fmt;

/// Task identifier, conventionally `PROJECT-NUMBER` but free-form: shorthands
/// and edits may set any string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRef(String);

impl TaskRef {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn from_parts(project: &str, number: &str) -> Self {
        Self(format!("{}-{}", project, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
