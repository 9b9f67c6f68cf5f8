//! Payment-gateway families.
//!
//! A gateway family bundles the one-time and subscription processors for a
//! single provider. The registry returned by [`payment_registry`] knows the
//! built-in gateways; callers can register further providers with their own
//! processor implementations.

use crate::error::RegistrationError;
use crate::registry::ConstructorRegistry;

/// Processes a single charge.
pub trait OneTimePayment: Send + Sync {
    fn process(&self, amount: f64) -> String;
}

/// Processes a recurring charge.
pub trait SubscriptionPayment: Send + Sync {
    fn process(&self, amount: f64) -> String;
}

/// Processors for one gateway, built together.
pub struct PaymentFamily {
    pub gateway: String,
    pub one_time: Box<dyn OneTimePayment>,
    pub subscription: Box<dyn SubscriptionPayment>,
}

impl PaymentFamily {
    pub fn new(
        gateway: impl Into<String>,
        one_time: Box<dyn OneTimePayment>,
        subscription: Box<dyn SubscriptionPayment>,
    ) -> Self {
        Self {
            gateway: gateway.into(),
            one_time,
            subscription,
        }
    }
}

/// Gateways shipped with the crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gateway {
    PayPal,
    Moneris,
    Stripe,
}

impl Gateway {
    pub const ALL: [Gateway; 3] = [Gateway::PayPal, Gateway::Moneris, Gateway::Stripe];

    /// Registry key and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Gateway::PayPal => "PayPal",
            Gateway::Moneris => "Moneris",
            Gateway::Stripe => "Stripe",
        }
    }

    pub fn family(self) -> PaymentFamily {
        PaymentFamily::new(
            self.as_str(),
            Box::new(OneTimeCharge { gateway: self }),
            Box::new(SubscriptionCharge { gateway: self }),
        )
    }
}

/// One-time processor for a built-in gateway.
#[derive(Debug)]
pub struct OneTimeCharge {
    gateway: Gateway,
}

impl OneTimePayment for OneTimeCharge {
    fn process(&self, amount: f64) -> String {
        format!("{}: One-time payment of {amount} processed", self.gateway.as_str())
    }
}

/// Subscription processor for a built-in gateway.
#[derive(Debug)]
pub struct SubscriptionCharge {
    gateway: Gateway,
}

impl SubscriptionPayment for SubscriptionCharge {
    fn process(&self, amount: f64) -> String {
        format!(
            "{}: Subscription payment of {amount} processed",
            self.gateway.as_str()
        )
    }
}

/// Registry keyed by gateway name (`PayPal`, `Moneris`, `Stripe`).
pub fn payment_registry() -> Result<ConstructorRegistry<PaymentFamily>, RegistrationError> {
    let mut registry = ConstructorRegistry::new();
    for gateway in Gateway::ALL {
        registry.register(gateway.as_str(), move || gateway.family())?;
    }
    Ok(registry)
}
