//! Type catalog
//!
//! The set of type definitions the reflector and the instantiator can see.
//! Built from explicit registrations, from the linkme registry, or both.

use std::collections::HashMap;
use std::sync::Arc;

use autowire_domain::{Injectable, TypeDefinition};
use tracing::debug;

use crate::registry::INJECTABLE_TYPES;

/// Type definitions keyed by type name
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, Arc<TypeDefinition>>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every type registered in [`INJECTABLE_TYPES`]
    pub fn discover() -> Self {
        let mut catalog = Self::new();
        for entry in INJECTABLE_TYPES {
            catalog.register((entry.definition)());
        }
        debug!(types = catalog.len(), "Discovered injectable types");
        catalog
    }

    /// Add a definition, replacing any previous one with the same type name
    pub fn register(&mut self, definition: TypeDefinition) {
        let name = definition.type_name().to_string();
        if self.types.insert(name.clone(), Arc::new(definition)).is_some() {
            debug!(type_name = %name, "Replaced type definition");
        }
    }

    /// Add the definition of `T`
    pub fn register_type<T: Injectable>(&mut self) {
        self.register(T::definition());
    }

    /// Builder form of [`register_type`](Self::register_type)
    #[must_use]
    pub fn with_type<T: Injectable>(mut self) -> Self {
        self.register_type::<T>();
        self
    }

    /// Builder form of [`register`](Self::register)
    #[must_use]
    pub fn with_definition(mut self, definition: TypeDefinition) -> Self {
        self.register(definition);
        self
    }

    /// Definition by exact type name
    pub fn get(&self, type_name: &str) -> Option<Arc<TypeDefinition>> {
        self.types.get(type_name).cloned()
    }

    /// Returns true if the type is catalogued
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Find a type by exact name, or by unique last path segment
    ///
    /// `"SimpleA"` matches `"my_crate::fixtures::SimpleA"` as long as no
    /// other catalogued type ends in `::SimpleA`.
    pub fn find(&self, name: &str) -> Option<Arc<TypeDefinition>> {
        if let Some(definition) = self.get(name) {
            return Some(definition);
        }
        let suffix = format!("::{name}");
        let mut matches = self
            .types
            .iter()
            .filter(|(type_name, _)| type_name.ends_with(&suffix));
        match (matches.next(), matches.next()) {
            (Some((_, definition)), None) => Some(Arc::clone(definition)),
            _ => None,
        }
    }

    /// Catalogued type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of catalogued types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true when no types are catalogued
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
