//! In-memory collection of records for one domain.
//!
//! A [`Collection`] is loaded in full at the start of an invocation, mutated by
//! at most one command, and handed back to the store layer for persistence.
//! Records keep their insertion order so listings and exports are stable
//! across runs.

use crate::error::{Result, TallyError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record that can live in a [`Collection`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Clone + Eq + Hash + Display + Debug;

    /// Top-level key of the persisted document (`{ "<KEY>": [...] }`).
    const KEY: &'static str;

    fn id(&self) -> &Self::Id;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from persisted records, rejecting duplicate ids.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(TallyError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn insert(&mut self, record: R) -> Result<&R> {
        if self.contains(record.id()) {
            return Err(TallyError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: &R::Id) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Removes a record, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    pub fn ids(&self) -> impl Iterator<Item = &R::Id> {
        self.records.iter().map(|r| r.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a R> + 'a
    where
        P: Fn(&R) -> bool + 'a,
    {
        self.records.iter().filter(move |r| predicate(*r))
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn task(id: &str) -> Task {
        Task::new(id.to_string(), format!("task {}", id))
    }

    #[test]
    fn preserves_insertion_order() {
        let mut tasks = Collection::new();
        tasks.insert(task("bb")).unwrap();
        tasks.insert(task("aa")).unwrap();
        tasks.insert(task("cc")).unwrap();

        let ids: Vec<_> = tasks.ids().cloned().collect();
        assert_eq!(ids, vec!["bb", "aa", "cc"]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut tasks = Collection::new();
        tasks.insert(task("aa")).unwrap();
        let err = tasks.insert(task("aa")).unwrap_err();
        assert!(matches!(err, TallyError::DuplicateId(id) if id == "aa"));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn from_records_rejects_duplicates() {
        let result = Collection::from_records(vec![task("aa"), task("aa")]);
        assert!(result.is_err());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut tasks =
            Collection::from_records(vec![task("a1"), task("b2"), task("c3")]).unwrap();
        let removed = tasks.remove(&"b2".to_string()).unwrap();
        assert_eq!(removed.id, "b2");
        assert!(tasks.remove(&"b2".to_string()).is_none());

        let ids: Vec<_> = tasks.ids().cloned().collect();
        assert_eq!(ids, vec!["a1", "c3"]);
    }
}
