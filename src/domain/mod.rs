//! Domain layer - Registration workflow, validation, and collaborator contracts

pub mod account;
pub mod auth;
pub mod directory;
pub mod error;
pub mod navigation;
pub mod registration;
pub mod session;

pub use account::{
    validate_all, validate_email, validate_field, AccountId, Field, FieldError, ProfileRecord,
    RegisteredAccount, RegistrationInput, RegistrationPolicy, ValidationErrors,
};
pub use auth::{AccountHandle, AuthErrorReason, AuthProvider};
pub use directory::{AccountDirectory, DirectoryError};
pub use error::RegistrationError;
pub use navigation::{Navigator, Screen};
pub use registration::RegistrationWorkflow;
pub use session::{
    SessionCredentials, SessionStore, SessionStoreError, EMAIL_KEY, PASSWORD_KEY,
};
