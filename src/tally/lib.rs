//! # Tally Architecture
//!
//! Tally is a pair of small, file-backed record stores: an expense tracker and a
//! task tracker. Both follow the same run-to-completion shape:
//!
//! ```text
//! load document ──▶ run one command ──▶ persist if it mutated ──▶ render
//! ```
//!
//! There is no state between runs besides the JSON document on disk.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binaries (bin/expense_tracker, bin/task_tracker) + cli/     │
//! │  - Parse arguments, render results, own stdout/stderr/exit  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens a store, dispatches one command, persists once     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - Pure operations over an in-memory Collection             │
//! │  - No I/O, no logging                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FileBackend, MemoryBackend         │
//! │  - Document encoding and corrupt-document policy            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Expenses get the smallest unused positive integer, so ids freed by `delete`
//! come back on the next `add`. Tasks get random 8-character hex tokens that
//! are checked against the live collection before use. See [`allocator`].
//!
//! ## Module Overview
//!
//! - [`api`]: `ExpenseApi` and `TaskApi`, the entry points for all operations
//! - [`commands`]: Business logic for each command
//! - [`collection`]: Ordered, id-unique in-memory record set
//! - [`allocator`]: Id allocation policies
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Expense`, `Task`, `TaskStatus`
//! - [`config`]: `tally.json` configuration
//! - [`error`]: Error types
//! - [`cli`]: Rendering and log setup shared by the two binaries

pub mod allocator;
pub mod api;
pub mod cli;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
