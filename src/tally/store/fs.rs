use super::StorageBackend;
use crate::error::{Result, TallyError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A JSON document at a fixed path on disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(TallyError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("store");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl StorageBackend for FileBackend {
    fn read_document(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TallyError::StorageUnreadable {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_document(&mut self, content: &str) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        // Atomic write
        let tmp_path = self.tmp_path(dir);
        let written =
            fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(TallyError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
