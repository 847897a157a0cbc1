//! JSON-backed attempt log.

use std::path::PathBuf;

use tutorkit_core::error::StoreError;
use tutorkit_core::score::AttemptRecord;
use tutorkit_core::traits::AttemptStore;

/// Append-only attempt log held in one pretty-printed JSON array.
pub struct JsonAttemptStore {
    path: PathBuf,
}

impl JsonAttemptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_all(&self) -> Result<Vec<AttemptRecord>, StoreError> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|err| StoreError::Malformed(format!("{}: {err}", self.path.display())))
    }
}

impl AttemptStore for JsonAttemptStore {
    fn record(&self, attempt: &AttemptRecord) -> Result<(), StoreError> {
        let mut attempts = self.load_all()?;
        attempts.push(attempt.clone());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&attempts)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn history(&self, user: &str) -> Result<Vec<AttemptRecord>, StoreError> {
        let mut attempts: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|attempt| attempt.user == user)
            .collect();
        attempts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(attempts)
    }
}
