//! Typed failures raised while registering or resolving keys.
//!
//! Resolution failures are values, not log lines: the core hands them back
//! to the caller, which decides whether to propagate (family registries) or
//! ignore them (chain composition).

use thiserror::Error;

/// A key had no exact match in the table it was resolved against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key '{key}'")]
pub struct UnknownKeyError {
    pub key: String,
}

impl UnknownKeyError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Setup-time failure while populating a resolution table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("registration key must not be empty")]
    EmptyKey,

    #[error("key '{0}' is already registered")]
    DuplicateKey(String),
}
