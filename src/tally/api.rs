//! # API Facade
//!
//! The API layer is the dispatcher between a UI and the command layer. One API
//! value lives for exactly one invocation:
//!
//! 1. [`ExpenseApi::open`] / [`TaskApi::open`] load the collection through a
//!    [`StorageBackend`], applying the store's [`CorruptPolicy`].
//! 2. One method runs one command against the in-memory collection.
//! 3. Mutating methods persist the collection once, and only when the command
//!    succeeded. Queries never write.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ExpenseApi<FileBackend>`, `TaskApi<FileBackend>`
//! - Testing: the same APIs over `MemoryBackend`
//!
//! The API returns [`CmdResult`] values and never prints. Warnings raised while
//! loading (e.g. a discarded corrupt document) are prepended to the messages
//! of whatever command runs next.

use crate::collection::{Collection, Record};
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Expense, Task, TaskStatus};
use crate::store::{load_collection, save_collection, CorruptPolicy, LoadStatus, StorageBackend};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub use crate::commands::expenses::ExpenseUpdate;
pub use crate::commands::{MessageLevel, Summary};

/// Default handling of damaged expense documents.
pub const EXPENSES_CORRUPT_POLICY: CorruptPolicy = CorruptPolicy::Discard;
/// Default handling of damaged task documents.
pub const TASKS_CORRUPT_POLICY: CorruptPolicy = CorruptPolicy::Reinitialize;

/// A loaded collection bound to the backend it came from.
struct Session<R: Record, B: StorageBackend> {
    backend: B,
    records: Collection<R>,
    notices: Vec<CmdMessage>,
}

impl<R: Record, B: StorageBackend> Session<R, B> {
    fn open(mut backend: B, policy: CorruptPolicy) -> Result<Self> {
        let loaded = load_collection::<R, B>(&mut backend, policy)?;
        let location = backend.location();
        let notices = match loaded.status {
            LoadStatus::Missing | LoadStatus::Loaded => Vec::new(),
            LoadStatus::Discarded { reason } => vec![CmdMessage::warning(format!(
                "Ignoring unreadable {} ({}); starting from an empty list",
                location.display(),
                reason
            ))],
            LoadStatus::Reinitialized { reason } => vec![CmdMessage::warning(format!(
                "Reset unreadable {} ({}) to an empty list",
                location.display(),
                reason
            ))],
        };
        Ok(Self {
            backend,
            records: loaded.collection,
            notices,
        })
    }

    /// Persists after a successful mutation; a failed command writes nothing.
    fn commit(&mut self, outcome: Result<CmdResult>) -> Result<CmdResult> {
        let result = outcome?;
        save_collection(&mut self.backend, &self.records)?;
        Ok(self.finish(result))
    }

    fn finish(&self, mut result: CmdResult) -> CmdResult {
        if !self.notices.is_empty() {
            let mut messages = self.notices.clone();
            messages.append(&mut result.messages);
            result.messages = messages;
        }
        result
    }
}

/// Expense tracker operations.
pub struct ExpenseApi<B: StorageBackend> {
    session: Session<Expense, B>,
    export_path: PathBuf,
}

impl<B: StorageBackend> ExpenseApi<B> {
    pub fn open(backend: B, policy: CorruptPolicy) -> Result<Self> {
        Ok(Self {
            session: Session::open(backend, policy)?,
            export_path: PathBuf::from("expenses.csv"),
        })
    }

    /// Where `export` writes when no explicit path is given.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Adds an expense dated today (local calendar).
    pub fn add_expense(&mut self, description: String, amount: f64) -> Result<CmdResult> {
        self.add_expense_on(description, amount, Local::now().date_naive())
    }

    pub fn add_expense_on(
        &mut self,
        description: String,
        amount: f64,
        date: NaiveDate,
    ) -> Result<CmdResult> {
        let outcome =
            commands::expenses::add::run(&mut self.session.records, description, amount, date);
        if let Ok(result) = &outcome {
            if let Some(expense) = result.affected_expenses.first() {
                tracing::debug!(id = expense.id, "allocated expense id");
            }
        }
        self.session.commit(outcome)
    }

    pub fn update_expense(&mut self, id: u32, update: ExpenseUpdate) -> Result<CmdResult> {
        let outcome = commands::expenses::update::run(&mut self.session.records, id, update);
        self.session.commit(outcome)
    }

    pub fn delete_expense(&mut self, id: u32) -> Result<CmdResult> {
        let outcome = commands::expenses::delete::run(&mut self.session.records, id);
        self.session.commit(outcome)
    }

    pub fn list_expenses(&self) -> Result<CmdResult> {
        let result = commands::expenses::list::run(&self.session.records)?;
        Ok(self.session.finish(result))
    }

    pub fn summary(&self, month: Option<String>) -> Result<CmdResult> {
        let result = commands::expenses::summary::run(&self.session.records, month)?;
        Ok(self.session.finish(result))
    }

    pub fn export(&self, file: Option<PathBuf>) -> Result<CmdResult> {
        let path = file.unwrap_or_else(|| self.export_path.clone());
        tracing::debug!(path = %path.display(), "exporting expenses");
        let result = commands::expenses::export::run(&self.session.records, &path)?;
        Ok(self.session.finish(result))
    }

    pub fn expenses(&self) -> &Collection<Expense> {
        &self.session.records
    }

    pub fn backend(&self) -> &B {
        &self.session.backend
    }
}

/// Task tracker operations.
pub struct TaskApi<B: StorageBackend> {
    session: Session<Task, B>,
}

impl<B: StorageBackend> TaskApi<B> {
    pub fn open(backend: B, policy: CorruptPolicy) -> Result<Self> {
        Ok(Self {
            session: Session::open(backend, policy)?,
        })
    }

    pub fn add_task(&mut self, description: String) -> Result<CmdResult> {
        let outcome = commands::tasks::add::run(&mut self.session.records, description);
        if let Ok(result) = &outcome {
            if let Some(task) = result.affected_tasks.first() {
                tracing::debug!(id = %task.id, "allocated task id");
            }
        }
        self.session.commit(outcome)
    }

    pub fn update_task(&mut self, id: &str, description: String) -> Result<CmdResult> {
        let outcome = commands::tasks::update::run(&mut self.session.records, id, description);
        self.session.commit(outcome)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<CmdResult> {
        let outcome = commands::tasks::delete::run(&mut self.session.records, id);
        self.session.commit(outcome)
    }

    pub fn mark_in_progress(&mut self, id: &str) -> Result<CmdResult> {
        let outcome = commands::tasks::status::mark_in_progress(&mut self.session.records, id);
        self.session.commit(outcome)
    }

    pub fn mark_done(&mut self, id: &str) -> Result<CmdResult> {
        let outcome = commands::tasks::status::mark_done(&mut self.session.records, id);
        self.session.commit(outcome)
    }

    pub fn list_tasks(&self, status: Option<TaskStatus>) -> Result<CmdResult> {
        let result = commands::tasks::list::run(&self.session.records, status)?;
        Ok(self.session.finish(result))
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.session.records
    }

    pub fn backend(&self) -> &B {
        &self.session.backend
    }
}
