//! Product creators.
//!
//! A `Creator` owns one product and runs shared business logic against it
//! without knowing the product's concrete type.

use crate::error::RegistrationError;
use crate::registry::ConstructorRegistry;

pub trait Product: Send + Sync {
    fn operation(&self) -> String;
}

#[derive(Debug, Default)]
pub struct SimpleProduct;

impl Product for SimpleProduct {
    fn operation(&self) -> String {
        "Result of the SimpleProduct".into()
    }
}

#[derive(Debug, Default)]
pub struct ConfigurableProduct;

impl Product for ConfigurableProduct {
    fn operation(&self) -> String {
        "Result of the ConfigurableProduct".into()
    }
}

/// Shared logic wrapped around whichever product a registry entry builds.
pub struct Creator {
    product: Box<dyn Product>,
}

impl Creator {
    pub fn new(product: Box<dyn Product>) -> Self {
        Self { product }
    }

    pub fn product(&self) -> &dyn Product {
        self.product.as_ref()
    }

    pub fn some_operation(&self) -> String {
        format!(
            "Creator: The same creator's code has just worked with {}",
            self.product.operation()
        )
    }
}

/// Registry keyed by product kind (`simple`, `configurable`).
pub fn product_registry() -> Result<ConstructorRegistry<Creator>, RegistrationError> {
    ConstructorRegistry::new()
        .with("simple", || Creator::new(Box::new(SimpleProduct)))?
        .with("configurable", || Creator::new(Box::new(ConfigurableProduct)))
}
