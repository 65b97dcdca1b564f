//! Identity provider contract

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::AccountId;

/// Why the identity provider rejected a call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthErrorReason {
    #[error("email is already registered")]
    EmailInUse,

    #[error("password was rejected by the identity provider")]
    WeakPassword,

    #[error("network failure: {0}")]
    Network(String),

    #[error("identity provider error: {0}")]
    Unknown(String),
}

/// Handle the provider issues for a newly created account
///
/// The access token authorizes follow-up calls (display-name update) for the
/// same account and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHandle {
    id: AccountId,
    access_token: Option<String>,
}

impl AccountHandle {
    /// Create a handle for a provider-assigned account id
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            access_token: None,
        }
    }

    /// Attach the short-lived access token issued at sign-up
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Consume the handle, keeping only the account id
    pub fn into_id(self) -> AccountId {
        self.id
    }
}

/// Trait for the remote identity provider
#[async_trait]
pub trait AuthProvider: Send + Sync + Debug {
    /// Create an account for the given credentials
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, AuthErrorReason>;

    /// Set the display name on a freshly created account
    async fn set_display_name(
        &self,
        handle: &AccountHandle,
        name: &str,
    ) -> Result<(), AuthErrorReason>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_handle() {
        let handle = AccountHandle::new(AccountId::new("acct-1")).with_access_token("tok");

        assert_eq!(handle.id().as_str(), "acct-1");
        assert_eq!(handle.access_token(), Some("tok"));
        assert_eq!(handle.into_id().as_str(), "acct-1");
    }

    #[test]
    fn test_auth_error_reason_display() {
        assert_eq!(
            AuthErrorReason::EmailInUse.to_string(),
            "email is already registered"
        );
        assert_eq!(
            AuthErrorReason::Network("timed out".to_string()).to_string(),
            "network failure: timed out"
        );
    }
}
