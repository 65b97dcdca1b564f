//! Account directory contract

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{AccountId, ProfileRecord};

/// Transport or storage fault while talking to the directory
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("directory error: {message}")]
pub struct DirectoryError {
    message: String,
}

impl DirectoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for the remote profile directory
#[async_trait]
pub trait AccountDirectory: Send + Sync + Debug {
    /// Check whether no existing profile uses this username
    ///
    /// The comparison is case-sensitive exact.
    async fn is_user_name_available(&self, user_name: &str) -> Result<bool, DirectoryError>;

    /// Write the profile record keyed by the provider-assigned account id
    async fn write_profile(
        &self,
        account_id: &AccountId,
        profile: &ProfileRecord,
    ) -> Result<(), DirectoryError>;
}
