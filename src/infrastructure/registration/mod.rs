//! Registration facade

mod service;

pub use service::{user_message, RegistrationService};
