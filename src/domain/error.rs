use thiserror::Error;

use crate::domain::account::ValidationErrors;
use crate::domain::auth::AuthErrorReason;

/// Terminal outcomes of a registration attempt
///
/// Every variant ends the current attempt; nothing is retried. The caller
/// decides how each kind is presented to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("username '{0}' is already taken")]
    UserNameTaken(String),

    #[error("account creation failed: {reason}")]
    Auth { reason: AuthErrorReason },

    #[error("username lookup failed: {message}")]
    DirectoryLookup { message: String },

    #[error("failed to write directory profile for account '{account_id}': {message}")]
    DirectoryWrite { account_id: String, message: String },

    #[error("failed to persist session credentials: {message}")]
    SessionWrite { message: String },

    #[error("a registration attempt is already in progress")]
    AttemptInProgress,

    #[error("the registration attempt was cancelled")]
    Cancelled,
}

impl RegistrationError {
    pub fn auth(reason: AuthErrorReason) -> Self {
        Self::Auth { reason }
    }

    pub fn directory_lookup(message: impl Into<String>) -> Self {
        Self::DirectoryLookup {
            message: message.into(),
        }
    }

    pub fn directory_write(account_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DirectoryWrite {
            account_id: account_id.into(),
            message: message.into(),
        }
    }

    pub fn session_write(message: impl Into<String>) -> Self {
        Self::SessionWrite {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_taken_error() {
        let error = RegistrationError::UserNameTaken("alice".to_string());
        assert_eq!(error.to_string(), "username 'alice' is already taken");
    }

    #[test]
    fn test_auth_error() {
        let error = RegistrationError::auth(AuthErrorReason::EmailInUse);
        assert_eq!(
            error.to_string(),
            "account creation failed: email is already registered"
        );
    }

    #[test]
    fn test_directory_write_error_carries_account_id() {
        let error = RegistrationError::directory_write("acct-1", "boom");
        assert_eq!(
            error.to_string(),
            "failed to write directory profile for account 'acct-1': boom"
        );
    }
}
