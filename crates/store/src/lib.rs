use netbar_core::{History, NetbarError, Result, Sample};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the persisted history inside the data directory.
const STATE_FILE: &str = "history.json";

/// Reads and writes the on-disk history snapshot.
///
/// The state file is a plain JSON array of samples, overwritten
/// wholesale on every persist. It is a best-effort cache: the in-memory
/// history stays authoritative for the running session, and a snapshot
/// that races an in-flight push is acceptable.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the per-user application-data directory.
    pub fn at_default_path() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Try to restore a history snapshot.
    ///
    /// Any failure (missing file, invalid JSON, wrong shape) is
    /// treated as absence; the caller substitutes a zeroed history.
    pub fn load(&self) -> Option<History> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let samples: Vec<Sample> = serde_json::from_str(&raw).ok()?;
        debug!("Restored {} samples from {}", samples.len(), self.path.display());
        Some(History::from_samples(samples))
    }

    /// Serialize the full history and overwrite the state file.
    pub fn persist(&self, history: &History) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string(&history.to_vec())
            .map_err(|e| NetbarError::Store(format!("serialize history: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Per-user application-data location of the state file.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());

    let base = if cfg!(target_os = "macos") {
        PathBuf::from(home).join("Library").join("Application Support")
    } else {
        std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(home).join(".local").join("share"))
    };

    base.join("netbar").join(STATE_FILE)
}
