//! Form validation for registration input
//!
//! Validation is pure and synchronous; it knows nothing about remote state.
//! Username uniqueness is the workflow's concern, not a validation rule.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::RegistrationInput;

/// Regex for a standard email shape: local part, '@', dotted domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Tunable validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    pub min_password_length: usize,
}

impl RegistrationPolicy {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// The four registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    UserName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::UserName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserName => "user_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a single field failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("is required")]
    Required,

    #[error("is not a valid email address")]
    InvalidEmail,

    #[error("must be at least {0} characters")]
    TooShort(usize),

    #[error("does not match the password")]
    Mismatch,
}

/// Per-field validation outcome; empty means the input is submit-eligible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

/// Check whether a value matches a standard email syntax
pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate a single field against the full input
///
/// Returns `None` when the field is valid. `ConfirmPassword` compares against
/// the input's `password` value, so all rules stay deterministic on the input
/// alone.
pub fn validate_field(
    field: Field,
    input: &RegistrationInput,
    policy: &RegistrationPolicy,
) -> Option<FieldError> {
    match field {
        Field::UserName => {
            if input.user_name.is_empty() {
                return Some(FieldError::Required);
            }
        }
        Field::Email => {
            if input.email.is_empty() {
                return Some(FieldError::Required);
            }
            if !validate_email(&input.email) {
                return Some(FieldError::InvalidEmail);
            }
        }
        Field::Password => {
            if input.password.is_empty() {
                return Some(FieldError::Required);
            }
            if input.password.chars().count() < policy.min_password_length {
                return Some(FieldError::TooShort(policy.min_password_length));
            }
        }
        Field::ConfirmPassword => {
            if input.confirm_password.is_empty() {
                return Some(FieldError::Required);
            }
            if input.confirm_password != input.password {
                return Some(FieldError::Mismatch);
            }
        }
    }

    None
}

/// Validate every field; used to gate submission
pub fn validate_all(input: &RegistrationInput, policy: &RegistrationPolicy) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in Field::ALL {
        if let Some(error) = validate_field(field, input, policy) {
            errors.insert(field, error);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            user_name: "alice".to_string(),
            email: "a@b.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last+tag@example.co.uk"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let errors = validate_all(&valid_input(), &RegistrationPolicy::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_every_empty_field_is_required() {
        let input = RegistrationInput {
            user_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        };

        let errors = validate_all(&input, &RegistrationPolicy::default());

        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(&FieldError::Required));
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();

        let errors = validate_all(&input, &RegistrationPolicy::default());
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn test_short_password() {
        let mut input = valid_input();
        input.password = "short".to_string();
        input.confirm_password = "short".to_string();

        let errors = validate_all(&input, &RegistrationPolicy::default());
        assert_eq!(errors.get(Field::Password), Some(&FieldError::TooShort(8)));
    }

    #[test]
    fn test_password_length_follows_policy() {
        let mut input = valid_input();
        input.password = "abcd".to_string();
        input.confirm_password = "abcd".to_string();

        let errors = validate_all(&input, &RegistrationPolicy::new(4));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_mismatched_confirmation_fails_regardless_of_other_fields() {
        let mut input = valid_input();
        input.confirm_password = "different123".to_string();

        let errors = validate_all(&input, &RegistrationPolicy::default());

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(&FieldError::Mismatch)
        );
    }

    #[test]
    fn test_validation_errors_display() {
        let mut input = valid_input();
        input.user_name = String::new();
        input.confirm_password = "different123".to_string();

        let errors = validate_all(&input, &RegistrationPolicy::default());
        assert_eq!(
            errors.to_string(),
            "user_name is required; confirm_password does not match the password"
        );
    }
}
