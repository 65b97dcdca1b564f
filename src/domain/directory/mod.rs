//! Account directory domain
//!
//! Contract for the queryable profile store used for username uniqueness and
//! profile persistence.

mod provider;

pub use provider::{AccountDirectory, DirectoryError};

#[cfg(test)]
pub use provider::mock::MockAccountDirectory;
