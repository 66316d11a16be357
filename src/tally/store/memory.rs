use super::StorageBackend;
use crate::error::{Result, TallyError};
use std::io;
use std::path::PathBuf;

/// In-memory document for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Option<Vec<u8>>,
    writes: usize,
    unreadable: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `content` already "on disk".
    pub fn with_document(content: &str) -> Self {
        Self {
            document: Some(content.as_bytes().to_vec()),
            ..Self::default()
        }
    }

    /// Every read fails as if the file were not readable.
    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Number of completed writes since construction.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StorageBackend for MemoryBackend {
    fn read_document(&self) -> Result<Option<Vec<u8>>> {
        if self.unreadable {
            return Err(TallyError::StorageUnreadable {
                path: self.location(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        Ok(self.document.clone())
    }

    fn write_document(&mut self, content: &str) -> Result<()> {
        self.document = Some(content.as_bytes().to_vec());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://store.json")
    }
}
