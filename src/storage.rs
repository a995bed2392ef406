// SPDX-License-Identifier: MPL-2.0

//! Local key-value storage
//!
//! Records are stored whole under a string key; there are no partial
//! updates. The file store keeps every key in one JSON object on disk.

use crate::errors::StorageError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value collaborator used by the pages
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    async fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: Value) -> StorageResult<()>;
}

/// Store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> StorageResult<Map<String, Value>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let mut entries = self.read_all().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write next to the target and rename so a crash never leaves half a file
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, serde_json::to_vec_pretty(&entries)?).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        debug!(key, path = %self.path.display(), "Stored value");
        Ok(())
    }
}
