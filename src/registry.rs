//! Key → family constructor registry.
//!
//! Each registered producer builds a complete family of related capabilities
//! on every call. Nothing is cached: two calls for the same key hand back two
//! independent families. Unknown keys are a caller error and come back as
//! `UnknownKeyError` untouched.

use crate::error::{RegistrationError, UnknownKeyError};
use crate::resolver::ResolutionTable;
use tracing::debug;

/// Boxed family constructor stored in the registry.
pub type Producer<F> = Box<dyn Fn() -> F + Send + Sync>;

/// Registry of family producers keyed by name.
pub struct ConstructorRegistry<F> {
    table: ResolutionTable<Producer<F>>,
}

impl<F> Default for ConstructorRegistry<F> {
    fn default() -> Self {
        Self {
            table: ResolutionTable::new(),
        }
    }
}

impl<F> ConstructorRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a producer for `key`. Setup-time only.
    pub fn register<P>(
        &mut self,
        key: impl Into<String>,
        producer: P,
    ) -> Result<(), RegistrationError>
    where
        P: Fn() -> F + Send + Sync + 'static,
    {
        let key = key.into();
        debug!(key = %key, "registering family producer");
        self.table.register(key, Box::new(producer))
    }

    /// Builder form of [`ConstructorRegistry::register`].
    pub fn with<P>(mut self, key: impl Into<String>, producer: P) -> Result<Self, RegistrationError>
    where
        P: Fn() -> F + Send + Sync + 'static,
    {
        self.register(key, producer)?;
        Ok(self)
    }

    /// Build a fresh family for `key`.
    pub fn create_family(&self, key: &str) -> Result<F, UnknownKeyError> {
        let producer = self.table.resolve(key)?;
        debug!(key, "creating family");
        Ok(producer())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Registered family keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }
}
