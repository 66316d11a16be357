//! # Command Layer
//!
//! Pure operations over an in-memory [`Collection`](crate::collection::Collection).
//! Commands never touch storage and never log: they mutate or read the
//! collection they are handed and describe what happened in a [`CmdResult`].
//! Persisting afterwards is the API's job.

use crate::error::{Result, TallyError};
use crate::model::{Expense, Task};
use std::path::PathBuf;

pub mod expenses;
pub mod tasks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Total of the expenses matching an optional `YYYY-MM` filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub month: Option<String>,
    pub count: usize,
    pub total: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_expenses: Vec<Expense>,
    pub listed_expenses: Vec<Expense>,
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<Task>,
    pub summary: Option<Summary>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.affected_expenses = expenses;
        self
    }

    pub fn with_listed_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.listed_expenses = expenses;
        self
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}

/// Descriptions must contain something other than whitespace.
pub(crate) fn require_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TallyError::ValidationMissing("description"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_descriptions_are_rejected() {
        assert!(require_description("Lunch").is_ok());
        assert!(matches!(
            require_description("  \t"),
            Err(TallyError::ValidationMissing("description"))
        ));
    }
}
