//! # Storage Layer
//!
//! Each domain persists its whole [`Collection`] as one JSON document:
//!
//! ```text
//! { "expenses": [ { "id": 1, "description": "...", "amount": 10.0, "date": "2024-01-10" } ] }
//! { "tasks":    [ { "id": "0a1b2c3d", "description": "...", "status": "todo", ... } ] }
//! ```
//!
//! Raw I/O sits behind the [`StorageBackend`] trait so the same load/save
//! logic runs against a real file ([`fs::FileBackend`]) or a buffer
//! ([`memory::MemoryBackend`]) in tests. The backend only moves bytes; this
//! module decides what a document means and what to do when it is damaged.
//!
//! ## Damaged documents
//!
//! A missing document is simply an empty collection. A document that exists
//! but does not parse, or lacks the expected top-level array, is handled by
//! the store's [`CorruptPolicy`]:
//!
//! - `Discard`: load as empty and leave the file alone until the next save.
//! - `Reinitialize`: load as empty and immediately write an empty document.
//! - `Fail`: surface [`TallyError::StorageCorrupt`].
//!
//! A well-shaped document whose array holds a bad record or a repeated id is
//! always [`TallyError::StorageCorrupt`], whatever the policy. Loading it as
//! empty would drop the good records on the next save.
//!
//! ## Concurrency
//!
//! There is no locking. Two processes racing on the same path will silently
//! overwrite each other's last save; writes are atomic only in the sense that
//! a reader never observes a half-written file.

use crate::collection::{Collection, Record};
use crate::error::{Result, TallyError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for raw document I/O.
pub trait StorageBackend {
    /// Read the raw document.
    /// Returns Ok(None) if it does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the document in full.
    fn write_document(&mut self, content: &str) -> Result<()>;

    /// Where the document lives (a real path for files, a virtual one otherwise).
    fn location(&self) -> PathBuf;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptPolicy {
    Discard,
    Reinitialize,
    Fail,
}

/// How a collection came to be in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No document on disk yet.
    Missing,
    Loaded,
    Discarded { reason: String },
    Reinitialized { reason: String },
}

#[derive(Debug)]
pub struct Loaded<R: Record> {
    pub collection: Collection<R>,
    pub status: LoadStatus,
}

pub fn load_collection<R, B>(backend: &mut B, policy: CorruptPolicy) -> Result<Loaded<R>>
where
    R: Record,
    B: StorageBackend,
{
    let location = backend.location();
    let Some(bytes) = backend.read_document()? else {
        tracing::debug!(path = %location.display(), "no {} document, starting empty", R::KEY);
        return Ok(Loaded {
            collection: Collection::new(),
            status: LoadStatus::Missing,
        });
    };

    let reason = match decode::<R>(&bytes) {
        Ok(collection) => {
            tracing::debug!(
                path = %location.display(),
                records = collection.len(),
                "loaded {}",
                R::KEY
            );
            return Ok(Loaded {
                collection,
                status: LoadStatus::Loaded,
            });
        }
        Err(DecodeError::Records(reason)) => {
            return Err(TallyError::StorageCorrupt {
                path: location,
                reason,
            })
        }
        Err(DecodeError::Shape(reason)) => reason,
    };

    match policy {
        CorruptPolicy::Fail => Err(TallyError::StorageCorrupt {
            path: location,
            reason,
        }),
        CorruptPolicy::Discard => {
            tracing::debug!(
                path = %location.display(),
                %reason,
                "discarding unreadable {} document",
                R::KEY
            );
            Ok(Loaded {
                collection: Collection::new(),
                status: LoadStatus::Discarded { reason },
            })
        }
        CorruptPolicy::Reinitialize => {
            tracing::debug!(
                path = %location.display(),
                %reason,
                "reinitializing unreadable {} document",
                R::KEY
            );
            let collection = Collection::new();
            save_collection(backend, &collection)?;
            Ok(Loaded {
                collection,
                status: LoadStatus::Reinitialized { reason },
            })
        }
    }
}

pub fn save_collection<R, B>(backend: &mut B, collection: &Collection<R>) -> Result<()>
where
    R: Record,
    B: StorageBackend,
{
    let content = encode(collection)?;
    backend.write_document(&content)?;
    tracing::debug!(
        path = %backend.location().display(),
        records = collection.len(),
        "saved {}",
        R::KEY
    );
    Ok(())
}

/// Pretty-printed `{ "<KEY>": [...] }`, record fields in declaration order.
pub fn encode<R: Record>(collection: &Collection<R>) -> Result<String> {
    let doc = DocumentRef(collection.records());
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Why a present document could not be turned into a collection.
#[derive(Debug)]
enum DecodeError {
    /// Not JSON, or no top-level array under the record key.
    Shape(String),
    /// The array is there but a record in it is unusable.
    Records(String),
}

fn decode<R: Record>(bytes: &[u8]) -> std::result::Result<Collection<R>, DecodeError> {
    let mut value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DecodeError::Shape(format!("invalid JSON: {}", e)))?;

    let items = match value.get_mut(R::KEY) {
        Some(Value::Array(items)) => std::mem::take(items),
        Some(_) => {
            return Err(DecodeError::Shape(format!(
                "\"{}\" is not an array",
                R::KEY
            )))
        }
        None => {
            return Err(DecodeError::Shape(format!(
                "missing top-level \"{}\" array",
                R::KEY
            )))
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<R>(item).map_err(|e| {
                DecodeError::Records(format!("invalid record at index {}: {}", index, e))
            })
        })
        .collect::<std::result::Result<Vec<R>, _>>()?;
    Collection::from_records(records).map_err(|e| DecodeError::Records(e.to_string()))
}

struct DocumentRef<'a, R>(&'a [R]);

impl<R: Record> Serialize for DocumentRef<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::KEY, self.0)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;
    use crate::model::{Expense, Task, TaskStatus};
    use chrono::NaiveDate;

    fn expense(id: u32, amount: f64, date: &str) -> Expense {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Expense::new(id, format!("expense {}", id), amount, date)
    }

    #[test]
    fn missing_document_loads_empty() {
        let mut backend = MemoryBackend::new();
        let loaded: Loaded<Expense> = load_collection(&mut backend, CorruptPolicy::Fail).unwrap();
        assert!(loaded.collection.is_empty());
        assert_eq!(loaded.status, LoadStatus::Missing);
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut backend = MemoryBackend::new();
        let expenses = Collection::from_records(vec![
            expense(1, 10.0, "2024-01-10"),
            expense(4, 2.25, "2024-02-01"),
        ])
        .unwrap();
        save_collection(&mut backend, &expenses).unwrap();

        let loaded: Loaded<Expense> = load_collection(&mut backend, CorruptPolicy::Fail).unwrap();
        assert_eq!(loaded.status, LoadStatus::Loaded);
        assert_eq!(loaded.collection, expenses);
    }

    #[test]
    fn task_round_trip_keeps_status_and_order() {
        let mut backend = MemoryBackend::new();
        let mut done = Task::new("ffff0000".into(), "ship".into());
        done.status = TaskStatus::Done;
        let tasks =
            Collection::from_records(vec![Task::new("0000ffff".into(), "plan".into()), done])
                .unwrap();
        save_collection(&mut backend, &tasks).unwrap();

        let loaded: Loaded<Task> = load_collection(&mut backend, CorruptPolicy::Fail).unwrap();
        assert_eq!(loaded.collection, tasks);
    }

    #[test]
    fn encode_keeps_field_order() {
        let expenses = Collection::from_records(vec![expense(1, 10.0, "2024-01-10")]).unwrap();
        let json = encode(&expenses).unwrap();
        let id = json.find("\"id\"").unwrap();
        let description = json.find("\"description\"").unwrap();
        let amount = json.find("\"amount\"").unwrap();
        let date = json.find("\"date\"").unwrap();
        assert!(id < description && description < amount && amount < date);
        assert!(json.starts_with("{\n  \"expenses\": ["));
    }

    #[test]
    fn discard_policy_loads_empty_without_writing() {
        let mut backend = MemoryBackend::with_document("not json at all");
        let loaded: Loaded<Expense> =
            load_collection(&mut backend, CorruptPolicy::Discard).unwrap();
        assert!(loaded.collection.is_empty());
        assert!(matches!(loaded.status, LoadStatus::Discarded { .. }));
        assert_eq!(backend.writes(), 0);
        assert_eq!(backend.document(), Some("not json at all"));
    }

    #[test]
    fn reinitialize_policy_writes_empty_document() {
        let mut backend = MemoryBackend::with_document("{\"tasks\": 42}");
        let loaded: Loaded<Task> =
            load_collection(&mut backend, CorruptPolicy::Reinitialize).unwrap();
        assert!(loaded.collection.is_empty());
        assert!(matches!(loaded.status, LoadStatus::Reinitialized { .. }));
        assert_eq!(backend.writes(), 1);

        let rewritten: Value = serde_json::from_str(backend.document().unwrap()).unwrap();
        assert_eq!(rewritten, serde_json::json!({ "tasks": [] }));
    }

    #[test]
    fn fail_policy_surfaces_corruption() {
        let mut backend = MemoryBackend::with_document("{\"somethingElse\": []}");
        let err = load_collection::<Expense, _>(&mut backend, CorruptPolicy::Fail).unwrap_err();
        match err {
            TallyError::StorageCorrupt { reason, .. } => {
                assert!(reason.contains("missing top-level \"expenses\""))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_fatal_under_every_policy() {
        let doc = r#"{"expenses": [
            {"id": 1, "description": "a", "amount": 1, "date": "2024-01-01"},
            {"id": 1, "description": "b", "amount": 2, "date": "2024-01-02"}
        ]}"#;
        for policy in [
            CorruptPolicy::Discard,
            CorruptPolicy::Reinitialize,
            CorruptPolicy::Fail,
        ] {
            let mut backend = MemoryBackend::with_document(doc);
            let err = load_collection::<Expense, _>(&mut backend, policy).unwrap_err();
            assert!(matches!(err, TallyError::StorageCorrupt { .. }));
            assert_eq!(backend.writes(), 0);
            assert_eq!(backend.document(), Some(doc));
        }
    }

    #[test]
    fn bad_record_keeps_task_document_intact() {
        let doc = r#"{"tasks": [
            {"id": "aaaa0001", "description": "keep me", "status": "todo",
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
            {"id": 2, "description": "broken", "status": "todo",
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}
        ]}"#;
        let mut backend = MemoryBackend::with_document(doc);
        let err =
            load_collection::<Task, _>(&mut backend, CorruptPolicy::Reinitialize).unwrap_err();
        match err {
            TallyError::StorageCorrupt { reason, .. } => {
                assert!(reason.contains("index 1"), "reason was {reason}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(backend.writes(), 0);
        assert_eq!(backend.document(), Some(doc));
    }

    #[test]
    fn null_amount_is_not_discarded() {
        let doc = r#"{"expenses": [
            {"id": 1, "description": "Rent", "amount": 1200, "date": "2024-01-01"},
            {"id": 2, "description": "Oops", "amount": null, "date": "2024-01-02"}
        ]}"#;
        let mut backend = MemoryBackend::with_document(doc);
        let err = load_collection::<Expense, _>(&mut backend, CorruptPolicy::Discard).unwrap_err();
        assert!(matches!(err, TallyError::StorageCorrupt { .. }));
    }

    #[test]
    fn decode_separates_shape_from_records() {
        assert!(matches!(
            decode::<Expense>(b"[1, 2"),
            Err(DecodeError::Shape(_))
        ));
        assert!(matches!(
            decode::<Expense>(br#"{"expenses": {}}"#),
            Err(DecodeError::Shape(_))
        ));
        assert!(matches!(
            decode::<Expense>(br#"{"expenses": [{"id": "x"}]}"#),
            Err(DecodeError::Records(_))
        ));
    }

    #[test]
    fn unreadable_document_is_fatal_under_every_policy() {
        for policy in [
            CorruptPolicy::Discard,
            CorruptPolicy::Reinitialize,
            CorruptPolicy::Fail,
        ] {
            let mut backend = MemoryBackend::unreadable();
            let err = load_collection::<Task, _>(&mut backend, policy).unwrap_err();
            assert!(matches!(err, TallyError::StorageUnreadable { .. }));
        }
    }
}
