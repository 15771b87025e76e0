//! Immutable factory registries.
//!
//! Checkers, validators and result adapters are looked up by identifier.
//! A registry is assembled once with the consuming `register` builder and is
//! read-only afterwards; every lookup produces a fresh instance.

use std::collections::BTreeMap;
use std::fmt;

use crate::adapter::ResultAdapter;
use crate::checker::{Checker, Validator};

/// Constructor stored in a registry.
pub type Factory<T> = Box<dyn Fn() -> Box<T> + Send + Sync>;

/// Identifier-to-factory map.
pub struct Registry<T: ?Sized> {
    factories: BTreeMap<String, Factory<T>>,
}

pub type CheckerRegistry = Registry<dyn Checker>;
pub type ValidatorRegistry = Registry<dyn Validator>;
pub type AdapterRegistry = Registry<dyn ResultAdapter>;

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory under `id`. A later registration replaces an earlier one.
    pub fn register(
        mut self,
        id: impl Into<String>,
        factory: impl Fn() -> Box<T> + Send + Sync + 'static,
    ) -> Self {
        self.factories.insert(id.into(), Box::new(factory));
        self
    }

    /// Build a fresh instance for `id`.
    pub fn create(&self, id: &str) -> Option<Box<T>> {
        self.factories.get(id).map(|factory| factory())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
