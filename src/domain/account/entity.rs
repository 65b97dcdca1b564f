//! Account entities and related types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque account identifier assigned by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap a provider-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw form values for one registration attempt
///
/// Submit-eligible only when every field validates; partial validity never is.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Passwords never reach logs or debug output
        f.debug_struct("RegistrationInput")
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a successful registration
///
/// Held transiently by the caller; the workflow keeps no account state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredAccount {
    account_id: AccountId,
    user_name: String,
    email: String,
}

impl RegisteredAccount {
    /// Create a new registered account
    pub fn new(
        account_id: AccountId,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            user_name: user_name.into(),
            email: email.into(),
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Directory document describing one registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    email: String,
    user_name: String,
    registered_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Create a new profile record stamped with the current time
    pub fn new(email: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_name: user_name.into(),
            registered_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
