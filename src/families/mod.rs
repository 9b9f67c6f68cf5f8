//! Built-in family registries.
//!
//! Each submodule defines one family of related capabilities and a function
//! that builds the registry mapping family keys to their producers. New
//! families are added by registering another producer; nothing else in the
//! crate matches on the key.

pub mod payments;
pub mod products;

pub use payments::{
    Gateway, OneTimePayment, PaymentFamily, SubscriptionPayment, payment_registry,
};
pub use products::{ConfigurableProduct, Creator, Product, SimpleProduct, product_registry};
