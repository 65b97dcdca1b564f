//! In-memory identity provider for local development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{AccountHandle, AccountId, AuthErrorReason, AuthProvider};

// The remote identity service enforces its own floor, below the form's
const PROVIDER_MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
struct StoredAccount {
    id: AccountId,
    display_name: Option<String>,
}

/// Identity provider backed by a process-local map
#[derive(Debug, Default)]
pub struct InMemoryAuthProvider {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name recorded for an email, if any
    pub async fn display_name(&self, email: &str) -> Option<String> {
        let accounts = self.accounts.read().await;
        accounts.get(email).and_then(|a| a.display_name.clone())
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountHandle, AuthErrorReason> {
        if password.chars().count() < PROVIDER_MIN_PASSWORD_LENGTH {
            return Err(AuthErrorReason::WeakPassword);
        }

        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(email) {
            return Err(AuthErrorReason::EmailInUse);
        }

        let id = AccountId::new(Uuid::new_v4().to_string());
        accounts.insert(
            email.to_string(),
            StoredAccount {
                id: id.clone(),
                display_name: None,
            },
        );

        Ok(AccountHandle::new(id).with_access_token(Uuid::new_v4().to_string()))
    }

    async fn set_display_name(
        &self,
        handle: &AccountHandle,
        name: &str,
    ) -> Result<(), AuthErrorReason> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .values_mut()
            .find(|a| &a.id == handle.id())
            .ok_or_else(|| AuthErrorReason::Unknown("unknown account handle".to_string()))?;

        account.display_name = Some(name.to_string());
        Ok(())
    }
}
