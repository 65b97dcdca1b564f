//! In-memory session store for tests and ephemeral runs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{SessionStore, SessionStoreError};

/// Session store that forgets everything at process exit
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemorySessionStore::new();

        store.put("email", "a@b.com").await.unwrap();

        assert_eq!(store.get("email").await.unwrap().as_deref(), Some("a@b.com"));
        assert!(store.get("password").await.unwrap().is_none());
    }
}
