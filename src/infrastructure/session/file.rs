//! File-backed session store
//!
//! A single JSON document on disk holding the session key-value map. Every
//! `put` rewrites the file, so the store survives process restarts and stays
//! last-write-wins.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{SessionStore, SessionStoreError};

/// Session store persisted as a JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store, loading any entries persisted by a previous run
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SessionStoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                SessionStoreError::new(format!("corrupt session file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(SessionStoreError::new(format!(
                    "failed to read session file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    SessionStoreError::new(format!(
                        "failed to create session directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| SessionStoreError::new(format!("failed to encode session: {}", e)))?;

        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            SessionStoreError::new(format!(
                "failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SessionCredentials, EMAIL_KEY, PASSWORD_KEY};

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileSessionStore::open(&path).await.unwrap();
            store.put(EMAIL_KEY, "a@b.com").await.unwrap();
            store.put(PASSWORD_KEY, "secret1").await.unwrap();
        }

        let reopened = FileSessionStore::open(&path).await.unwrap();
        assert_eq!(reopened.get(EMAIL_KEY).await.unwrap().as_deref(), Some("a@b.com"));
        assert_eq!(
            reopened.get(PASSWORD_KEY).await.unwrap().as_deref(),
            Some("secret1")
        );

        let credentials = SessionCredentials::restore(&reopened).await.unwrap().unwrap();
        assert_eq!(credentials.email(), "a@b.com");
        assert_eq!(credentials.password(), "secret1");
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("absent.json"))
            .await
            .unwrap();

        assert!(store.get(EMAIL_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");

        let store = FileSessionStore::open(&path).await.unwrap();
        store.put("key", "value").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        assert!(FileSessionStore::open(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("session.json"))
            .await
            .unwrap();

        store.put(EMAIL_KEY, "first@b.com").await.unwrap();
        store.put(EMAIL_KEY, "second@b.com").await.unwrap();

        assert_eq!(
            store.get(EMAIL_KEY).await.unwrap().as_deref(),
            Some("second@b.com")
        );
    }
}
