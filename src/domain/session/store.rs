//! Session persistence contract

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the session email is stored
pub const EMAIL_KEY: &str = "email";

/// Key under which the session password is stored
pub const PASSWORD_KEY: &str = "password";

/// Fault while reading or writing the local session store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session store error: {message}")]
pub struct SessionStoreError {
    message: String,
}

impl SessionStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for scoped key-value persistence surviving process restarts
///
/// Process-wide and last-write-wins: a later registration silently overwrites
/// an earlier session.
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    async fn put(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
}

/// Credentials cached locally so app startup can restore a session
///
/// Written exactly once per successful registration, after account creation,
/// never before.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    email: String,
    password: String,
}

impl SessionCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Persist both credential keys, email first
    pub async fn persist<S: SessionStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<(), SessionStoreError> {
        store.put(EMAIL_KEY, &self.email).await?;
        store.put(PASSWORD_KEY, &self.password).await
    }

    /// Restore previously persisted credentials, if both keys are present
    pub async fn restore<S: SessionStore + ?Sized>(
        store: &S,
    ) -> Result<Option<Self>, SessionStoreError> {
        let email = store.get(EMAIL_KEY).await?;
        let password = store.get(PASSWORD_KEY).await?;

        match (email, password) {
            (Some(email), Some(password)) => Ok(Some(Self { email, password })),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
