//! JSON file-based session store.
//!
//! Keeps the whole session document in memory and persists it with atomic file
//! writes (write-to-temp + rename) so a crash never leaves a corrupt file.

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::SessionStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Container format written to disk.
///
/// ```json
/// {
///   "version": 1,
///   "saved_at": 1700000000,
///   "values": {
///     "accessToken": "...",
///     "orgId": "ORG@AdobeOrg"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Unix timestamp of the last write.
    #[serde(default)]
    saved_at: Option<i64>,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            version: 1,
            saved_at: None,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file session store.
///
/// `Send` but not `Sync`; owned by a single application state.
pub struct JsonStorage {
    file_path: PathBuf,
    data: SessionData,
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON session store.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but does not contain a valid session document.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON session store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            SessionData::default()
        };

        tracing::debug!(value_count = data.values.len(), "session store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Unix timestamp of the last successful write, if any.
    #[must_use]
    pub const fn saved_at(&self) -> Option<i64> {
        self.data.saved_at
    }

    fn load_from_file(path: &Path) -> Result<SessionData> {
        let contents = std::fs::read_to_string(path)?;
        let data: SessionData = serde_json::from_str(&contents)
            .map_err(|e| ExplorerError::Storage(format!("failed to parse session file: {e}")))?;

        tracing::debug!(version = data.version, values = data.values.len(), "loaded session data");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.saved_at = Some(chrono::Utc::now().timestamp());
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ExplorerError::Storage(format!("failed to serialize session: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "session saved");
        Ok(())
    }
}

impl SessionStore for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_session_set", key = %key).entered();

        if self.data.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.data.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_session_clear").entered();

        self.data.values.clear();
        self.dirty = true;
        self.save_to_file()
    }
}

impl std::fmt::Debug for JsonStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStorage")
            .field("file_path", &self.file_path)
            .field("values", &self.data.values.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty session on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save session on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        {
            let mut store = JsonStorage::new(path.clone()).unwrap();
            store.set("orgId", "ORG").unwrap();
            assert!(store.saved_at().is_some());
        }

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("orgId").unwrap().as_deref(), Some("ORG"));
        assert_eq!(reopened.get("clientId").unwrap(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonStorage::new(path.clone()).unwrap();
        store.set("accessToken", "abc").unwrap();
        store.clear().unwrap();
        drop(store);

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("accessToken").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, ExplorerError::Storage(_)));
    }
}
