//! Text frames: each layer renders as `Label(inner)`.

use crate::composer::ChainComposer;
use crate::error::RegistrationError;

pub trait Component {
    fn operation(&self) -> String;
}

pub type DynComponent = dyn Component + Send + Sync;

#[derive(Debug, Default)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".into()
    }
}

/// Wraps exactly one inner component in a labelled pair of parentheses.
pub struct Frame {
    label: String,
    inner: Box<DynComponent>,
}

impl Frame {
    pub fn new(label: impl Into<String>, inner: Box<DynComponent>) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }
}

impl Component for Frame {
    fn operation(&self) -> String {
        format!("{}({})", self.label, self.inner.operation())
    }
}

fn framer(label: &'static str) -> impl Fn(Box<DynComponent>) -> Box<DynComponent> + Send + Sync {
    move |inner: Box<DynComponent>| -> Box<DynComponent> { Box::new(Frame::new(label, inner)) }
}

/// Composer with `A` → `ConcreteDecoratorA` and `B` → `ConcreteDecoratorB`.
pub fn frame_composer() -> Result<ChainComposer<DynComponent>, RegistrationError> {
    ChainComposer::new()
        .with("A", framer("ConcreteDecoratorA"))?
        .with("B", framer("ConcreteDecoratorB"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_first_key_innermost() {
        let composer = frame_composer().unwrap();
        let framed = composer.compose(Box::new(ConcreteComponent), &["A", "B"]);
        assert_eq!(
            framed.operation(),
            "ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))"
        );
    }

    #[test]
    fn bare_component_passes_through() {
        let composer = frame_composer().unwrap();
        let framed = composer.compose(Box::new(ConcreteComponent), &["C"]);
        assert_eq!(framed.operation(), "ConcreteComponent");
    }
}
