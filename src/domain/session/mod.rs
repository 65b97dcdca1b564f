//! Session domain
//!
//! Contract for the local key-value store that caches session credentials
//! across restarts.

mod store;

pub use store::{
    SessionCredentials, SessionStore, SessionStoreError, EMAIL_KEY, PASSWORD_KEY,
};

#[cfg(test)]
pub use store::mock::MockSessionStore;
