use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Expense with ID {0} not found")]
    ExpenseNotFound(u32),

    #[error("Task with ID {0} not found")]
    TaskNotFound(String),

    #[error("Missing required argument: {0}")]
    ValidationMissing(&'static str),

    /// The store exists but could not be read (permissions, disk failure).
    #[error("Cannot read store {}: {source}", path.display())]
    StorageUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store {} is corrupt: {reason}", path.display())]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Could not allocate a unique id after {0} attempts")]
    IdSpaceExhausted(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
