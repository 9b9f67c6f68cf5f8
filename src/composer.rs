//! Ordered decorator chains built from runtime keys.
//!
//! `compose` starts from a base capability and, for each requested key in
//! order, wraps the running result in the layer registered under that key.
//! The first key ends up innermost and the last key outermost. Keys with no
//! registered layer are skipped without error; composition never fails.

use crate::error::RegistrationError;
use crate::resolver::ResolutionTable;
use serde::Serialize;

/// Boxed constructor that wraps an inner capability in one new layer.
pub type WrapperConstructor<C> = Box<dyn Fn(Box<C>) -> Box<C> + Send + Sync>;

/// Composer over capabilities of type `C` (usually a `dyn Trait`).
pub struct ChainComposer<C: ?Sized> {
    table: ResolutionTable<WrapperConstructor<C>>,
}

/// Which requested keys a composer would apply and which it would skip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompositionPlan {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

impl<C: ?Sized> Default for ChainComposer<C> {
    fn default() -> Self {
        Self {
            table: ResolutionTable::new(),
        }
    }
}

impl<C: ?Sized> ChainComposer<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the layer applied for `key`. Setup-time only.
    pub fn register<W>(&mut self, key: impl Into<String>, wrap: W) -> Result<(), RegistrationError>
    where
        W: Fn(Box<C>) -> Box<C> + Send + Sync + 'static,
    {
        self.table.register(key, Box::new(wrap))
    }

    /// Builder form of [`ChainComposer::register`].
    pub fn with<W>(mut self, key: impl Into<String>, wrap: W) -> Result<Self, RegistrationError>
    where
        W: Fn(Box<C>) -> Box<C> + Send + Sync + 'static,
    {
        self.register(key, wrap)?;
        Ok(self)
    }

    /// Wrap `base` in one layer per recognized key, left to right.
    ///
    /// Duplicated keys apply once per occurrence. Unrecognized keys leave the
    /// running result untouched and are not reported here; use
    /// [`ChainComposer::plan`] to find out which keys were dropped.
    pub fn compose<S: AsRef<str>>(&self, base: Box<C>, keys: &[S]) -> Box<C> {
        keys.iter()
            .fold(base, |current, key| match self.table.resolve(key.as_ref()) {
                Ok(wrap) => wrap(current),
                Err(_) => current,
            })
    }

    /// Partition `keys` into applied and skipped, preserving request order.
    pub fn plan<S: AsRef<str>>(&self, keys: &[S]) -> CompositionPlan {
        let mut plan = CompositionPlan::default();
        for key in keys {
            let key = key.as_ref();
            if self.table.contains(key) {
                plan.applied.push(key.to_string());
            } else {
                plan.skipped.push(key.to_string());
            }
        }
        plan
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Registered layer keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Label {
        fn text(&self) -> String;
    }

    struct Root;

    impl Label for Root {
        fn text(&self) -> String {
            "root".into()
        }
    }

    struct Tag {
        inner: Box<dyn Label>,
        tag: &'static str,
    }

    impl Label for Tag {
        fn text(&self) -> String {
            format!("{}+{}", self.inner.text(), self.tag)
        }
    }

    fn tagger(tag: &'static str) -> impl Fn(Box<dyn Label>) -> Box<dyn Label> + Send + Sync {
        move |inner: Box<dyn Label>| -> Box<dyn Label> { Box::new(Tag { inner, tag }) }
    }

    fn composer() -> ChainComposer<dyn Label> {
        ChainComposer::new()
            .with("x", tagger("x"))
            .and_then(|c| c.with("y", tagger("y")))
            .unwrap()
    }

    #[test]
    fn empty_request_returns_base() {
        let keys: [&str; 0] = [];
        assert_eq!(composer().compose(Box::new(Root), &keys).text(), "root");
    }

    #[test]
    fn layers_apply_left_to_right() {
        let composer = composer();
        assert_eq!(composer.compose(Box::new(Root), &["x", "y"]).text(), "root+x+y");
        assert_eq!(composer.compose(Box::new(Root), &["y", "x"]).text(), "root+y+x");
    }

    #[test]
    fn duplicates_apply_per_occurrence() {
        let composed = composer().compose(Box::new(Root), &["x", "x", "y", "x"]);
        assert_eq!(composed.text(), "root+x+x+y+x");
    }

    #[test]
    fn unknown_keys_are_identity_steps() {
        let composer = composer();
        assert_eq!(composer.compose(Box::new(Root), &["z", "X", ""]).text(), "root");
        assert_eq!(
            composer.compose(Box::new(Root), &["z", "x", "nope", "y"]).text(),
            "root+x+y"
        );
    }

    #[test]
    fn plan_partitions_in_request_order() {
        let plan = composer().plan(&["y", "zz", "x", "y", "aa"]);
        assert_eq!(plan.applied, vec!["y", "x", "y"]);
        assert_eq!(plan.skipped, vec!["zz", "aa"]);
    }

    #[test]
    fn accepts_owned_key_sequences() {
        let keys = vec!["x".to_string(), "y".to_string()];
        assert_eq!(composer().compose(Box::new(Root), &keys).text(), "root+x+y");
    }
}
