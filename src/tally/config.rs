use crate::error::{Result, TallyError};
use crate::store::CorruptPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "tally.json";
const DEFAULT_EXPENSES_FILE: &str = "expenses.json";
const DEFAULT_TASKS_FILE: &str = "tasks.json";
const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// Configuration for the trackers, stored in `<data-dir>/tally.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TallyConfig {
    /// Expense document, relative to the data directory unless absolute
    pub expenses_file: PathBuf,

    /// Task document, relative to the data directory unless absolute
    pub tasks_file: PathBuf,

    /// Where `export` writes when no `--file` is given
    pub export_file: PathBuf,

    /// Overrides how both trackers treat a damaged document
    pub on_corrupt: Option<CorruptPolicy>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            expenses_file: PathBuf::from(DEFAULT_EXPENSES_FILE),
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            on_corrupt: None,
        }
    }
}

impl TallyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(TallyError::Io(e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| TallyError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn expenses_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.expenses_file)
    }

    pub fn tasks_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.tasks_file)
    }

    pub fn export_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.export_file)
    }

    /// The configured policy, falling back to the tracker's own default.
    pub fn corrupt_policy(&self, default: CorruptPolicy) -> CorruptPolicy {
        self.on_corrupt.unwrap_or(default)
    }
}
