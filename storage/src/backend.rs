//! Raw string key-value backends.

use dailyconcept_core::StorageError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

pub trait KeyValueBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.values.write().await.clear();
        Ok(())
    }
}

/// All keys in one JSON object file, rewritten through a temp file on every
/// change.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self, key: &str) -> Result<HashMap<String, String>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw).map_err(|_| StorageError::CorruptValue {
            key: self.path.display().to_string(),
        })
    }

    async fn store(&self, key: &str, values: &HashMap<String, String>) -> Result<(), StorageError> {
        let write_failed = |reason: String| StorageError::WriteFailed {
            key: key.to_string(),
            reason,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| write_failed(e.to_string()))?;
        }

        let body = serde_json::to_string_pretty(values).map_err(|e| write_failed(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| write_failed(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| write_failed(e.to_string()))?;
        debug!("Persisted {} keys to {}", values.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load(key).await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut values = match self.load(key).await {
            Err(StorageError::CorruptValue { .. }) => {
                warn!("Discarding unreadable store at {}", self.path.display());
                HashMap::new()
            }
            other => other?,
        };
        values.insert(key.to_string(), value);
        self.store(key, &values).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.store("*", &HashMap::new()).await
    }
}
