//! Account domain
//!
//! This module provides the registration form types, the registered-account
//! entity, and the pure validation rules that gate submission.

mod entity;
mod validation;

pub use entity::{AccountId, ProfileRecord, RegisteredAccount, RegistrationInput};
pub use validation::{
    validate_all, validate_email, validate_field, Field, FieldError, RegistrationPolicy,
    ValidationErrors,
};
