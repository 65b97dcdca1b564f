//! REST adapter for the profile directory
//!
//! Availability is probed by fetching the profile indexed under a username;
//! a missing document means the name is free. Profiles are written under the
//! provider-assigned account id.

use async_trait::async_trait;

use super::super::http_client::HttpClientTrait;
use crate::domain::{AccountDirectory, AccountId, DirectoryError, ProfileRecord};

/// Profile directory over a document-style REST API
#[derive(Debug)]
pub struct RestAccountDirectory<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> RestAccountDirectory<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn by_username_url(&self, user_name: &str) -> String {
        format!("{}/profiles/by-username/{}", self.base_url, user_name)
    }

    fn profile_url(&self, account_id: &AccountId) -> String {
        format!("{}/profiles/{}", self.base_url, account_id)
    }
}

#[async_trait]
impl<C: HttpClientTrait> AccountDirectory for RestAccountDirectory<C> {
    async fn is_user_name_available(&self, user_name: &str) -> Result<bool, DirectoryError> {
        let existing = self
            .client
            .get_json(&self.by_username_url(user_name))
            .await
            .map_err(|e| DirectoryError::new(e.to_string()))?;

        Ok(existing.is_none())
    }

    async fn write_profile(
        &self,
        account_id: &AccountId,
        profile: &ProfileRecord,
    ) -> Result<(), DirectoryError> {
        let body = serde_json::to_value(profile)
            .map_err(|e| DirectoryError::new(format!("failed to encode profile: {}", e)))?;

        self.client
            .put_json(&self.profile_url(account_id), &body)
            .await
            .map_err(|e| DirectoryError::new(e.to_string()))?;

        Ok(())
    }
}
