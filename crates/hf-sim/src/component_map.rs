//! Insertion-ordered component storage.

use hf_components::Component;
use std::collections::HashMap;

/// The live component instances of one engine, keyed by declared name.
///
/// Iteration order is the definition's declaration order; that order is the
/// per-step update order and must stay stable for run-to-run reproducibility.
/// The key set is fixed once construction completes: there is no removal
/// API, and nothing inserts after the loader hands the map to the engine.
/// Disabling a component is how it leaves the simulated network.
#[derive(Default)]
pub struct ComponentMap {
    items: Vec<Box<dyn Component>>,
    index: HashMap<String, usize>,
}

impl ComponentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly built component. Rejects duplicate names; the
    /// caller reports that as a build problem.
    pub(crate) fn insert(&mut self, component: Box<dyn Component>) -> Result<(), String> {
        let name = component.name().to_string();
        if self.index.contains_key(&name) {
            return Err(name);
        }
        self.index.insert(name, self.items.len());
        self.items.push(component);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Component> {
        let i = *self.index.get(name)?;
        Some(self.items[i].as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Component> {
        let i = *self.index.get(name)?;
        Some(self.items[i].as_mut())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Components in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.items.iter().map(|c| c.as_ref())
    }

    /// Components in declaration order, mutable.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Component>> {
        self.items.iter_mut()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|c| c.name())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
