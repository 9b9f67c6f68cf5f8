//! Beverages priced by stacking add-on layers around a base drink.
//!
//! Every add-on is an [`AddOn`] link that owns the beverage it wraps, adds a
//! fixed amount to its cost, and appends a fixed suffix to its description.
//! Cost contributions commute; description suffixes keep request order.

pub mod menu;

use crate::composer::ChainComposer;
use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};

pub use menu::{MENU_ENV, MenuConfig, resolve_menu};

pub trait Beverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

/// Shareable beverage trait object used throughout the composer.
pub type DynBeverage = dyn Beverage + Send + Sync;

/// Undecorated drink at the root of every chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseBeverage {
    pub description: String,
    pub cost: f64,
}

impl BaseBeverage {
    pub fn new(description: impl Into<String>, cost: f64) -> Self {
        Self {
            description: description.into(),
            cost,
        }
    }

    pub fn simple_coffee() -> Self {
        Self::new("Simple Coffee", 5.0)
    }
}

impl Beverage for BaseBeverage {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// One add-on entry: the key that selects it and what it contributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOnSpec {
    pub key: String,
    pub increment: f64,
    pub suffix: String,
}

impl AddOnSpec {
    pub fn new(key: impl Into<String>, increment: f64, suffix: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            increment,
            suffix: suffix.into(),
        }
    }

    /// Wrap `inner` in a new layer carrying this add-on.
    pub fn wrap(&self, inner: Box<DynBeverage>) -> Box<DynBeverage> {
        Box::new(AddOn {
            inner,
            increment: self.increment,
            suffix: self.suffix.clone(),
        })
    }
}

/// Composition link around exactly one inner beverage.
pub struct AddOn {
    inner: Box<DynBeverage>,
    increment: f64,
    suffix: String,
}

impl AddOn {
    pub fn inner(&self) -> &DynBeverage {
        self.inner.as_ref()
    }
}

impl Beverage for AddOn {
    fn cost(&self) -> f64 {
        self.inner.cost() + self.increment
    }

    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(&self.suffix);
        description
    }
}

/// The add-ons every coffee menu starts with.
pub fn builtin_add_ons() -> Vec<AddOnSpec> {
    vec![
        AddOnSpec::new("milk", 1.0, ", Milk"),
        AddOnSpec::new("sugar", 0.5, ", Sugar"),
        AddOnSpec::new("caramel", 1.5, ", Caramel"),
        AddOnSpec::new("whippedCream", 2.0, ", Whipped Cream"),
    ]
}

/// Build a composer with one layer per spec.
pub fn composer_from_specs(
    specs: &[AddOnSpec],
) -> Result<ChainComposer<DynBeverage>, RegistrationError> {
    let mut composer = ChainComposer::new();
    for spec in specs {
        let layer = spec.clone();
        composer.register(spec.key.clone(), move |inner: Box<DynBeverage>| {
            layer.wrap(inner)
        })?;
    }
    Ok(composer)
}

/// Composer preloaded with [`builtin_add_ons`].
pub fn coffee_composer() -> Result<ChainComposer<DynBeverage>, RegistrationError> {
    composer_from_specs(&builtin_add_ons())
}
