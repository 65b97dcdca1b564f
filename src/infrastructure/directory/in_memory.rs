//! In-memory profile directory for local development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{AccountDirectory, AccountId, DirectoryError, ProfileRecord};

/// Profile directory backed by a process-local map keyed by account id
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    profiles: RwLock<HashMap<String, ProfileRecord>>,
    should_fail: RwLock<bool>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether operations should fail
    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    /// Profile stored for an account id, if any
    pub async fn profile(&self, account_id: &AccountId) -> Option<ProfileRecord> {
        self.profiles.read().await.get(account_id.as_str()).cloned()
    }

    async fn check_should_fail(&self) -> Result<(), DirectoryError> {
        if *self.should_fail.read().await {
            return Err(DirectoryError::new("directory configured to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn is_user_name_available(&self, user_name: &str) -> Result<bool, DirectoryError> {
        self.check_should_fail().await?;

        let profiles = self.profiles.read().await;
        Ok(!profiles.values().any(|p| p.user_name() == user_name))
    }

    async fn write_profile(
        &self,
        account_id: &AccountId,
        profile: &ProfileRecord,
    ) -> Result<(), DirectoryError> {
        self.check_should_fail().await?;

        self.profiles
            .write()
            .await
            .insert(account_id.as_str().to_string(), profile.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_availability_is_case_sensitive_exact() {
        let directory = InMemoryAccountDirectory::new();
        directory
            .write_profile(
                &AccountId::new("acct-1"),
                &ProfileRecord::new("a@b.com", "alice"),
            )
            .await
            .unwrap();

        assert!(!directory.is_user_name_available("alice").await.unwrap());
        assert!(directory.is_user_name_available("Alice").await.unwrap());
        assert!(directory.is_user_name_available("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_and_read_back() {
        let directory = InMemoryAccountDirectory::new();
        let id = AccountId::new("acct-1");

        directory
            .write_profile(&id, &ProfileRecord::new("a@b.com", "alice"))
            .await
            .unwrap();

        let stored = directory.profile(&id).await.unwrap();
        assert_eq!(stored.email(), "a@b.com");
        assert_eq!(stored.user_name(), "alice");
    }

    #[tokio::test]
    async fn test_failure_knob() {
        let directory = InMemoryAccountDirectory::new();
        directory.set_should_fail(true).await;

        assert!(directory.is_user_name_available("alice").await.is_err());
    }
}
