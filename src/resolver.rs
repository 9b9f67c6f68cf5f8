//! Exact-match key resolution shared by the family registry and the chain
//! composer.
//!
//! A `ResolutionTable` is populated once during setup and only read
//! afterwards. Keys are case-sensitive and compared byte for byte; there is no
//! folding or prefix matching, so a key either resolves or it does not.

use crate::error::{RegistrationError, UnknownKeyError};
use std::collections::BTreeMap;

/// Look up the producer registered under exactly `key`.
pub fn resolve<'t, P>(
    key: &str,
    table: &'t BTreeMap<String, P>,
) -> Result<&'t P, UnknownKeyError> {
    table.get(key).ok_or_else(|| UnknownKeyError::new(key))
}

/// Ordered key → producer table.
///
/// Iteration follows key order so listings stay deterministic across runs.
pub struct ResolutionTable<P> {
    entries: BTreeMap<String, P>,
}

impl<P> Default for ResolutionTable<P> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<P> ResolutionTable<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry. Empty and duplicate keys are rejected so a table never
    /// holds two producers competing for the same name.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        producer: P,
    ) -> Result<(), RegistrationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(RegistrationError::EmptyKey);
        }
        if self.entries.contains_key(&key) {
            return Err(RegistrationError::DuplicateKey(key));
        }
        self.entries.insert(key, producer);
        Ok(())
    }

    pub fn resolve(&self, key: &str) -> Result<&P, UnknownKeyError> {
        resolve(key, &self.entries)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
