//! Keyed capability registries and decorator chains.
//!
//! Two resolution policies live side by side. [`ConstructorRegistry`] turns
//! one family key into a freshly built family and treats an unknown key as a
//! hard error. [`ChainComposer`] turns an ordered list of keys into layers
//! wrapped around a base capability and quietly skips keys it does not know.
//! Both sit on the same exact-match [`resolver`].
//!
//! The built-in families (`families`), beverage add-ons (`beverage`), and
//! text frames (`frame`) are the concrete catalogs the `capweave` binary
//! exposes.

pub mod beverage;
pub mod composer;
pub mod error;
pub mod families;
pub mod frame;
pub mod logging;
pub mod registry;
pub mod resolver;
mod schema_loader;

pub use beverage::{
    AddOn, AddOnSpec, BaseBeverage, Beverage, DynBeverage, MenuConfig, coffee_composer,
};
pub use composer::{ChainComposer, CompositionPlan};
pub use error::{RegistrationError, UnknownKeyError};
pub use families::{Creator, Gateway, PaymentFamily, payment_registry, product_registry};
pub use frame::{Component, ConcreteComponent, frame_composer};
pub use registry::ConstructorRegistry;
pub use resolver::{ResolutionTable, resolve};

/// Split comma- or whitespace-delimited key lists into tokens.
///
/// Empty tokens are dropped; everything else is kept verbatim, including
/// duplicates and case, because both carry meaning for composition.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
