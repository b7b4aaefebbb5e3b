//! In-memory service container
//!
//! A flat, concurrent map from type name to [`RegistryValue`]. Writes and
//! reads may interleave across threads; each lookup sees one consistent
//! entry.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use autowire_domain::{Error, RegistryValue, Result, ServiceRegistry};
use dashmap::DashMap;
use tracing::trace;

/// Default [`ServiceRegistry`] implementation
#[derive(Default)]
pub struct Container {
    entries: DashMap<String, RegistryValue>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `type_name`
    ///
    /// Returns the previous entry, if any.
    pub fn set(&self, type_name: impl Into<String>, value: RegistryValue) -> Option<RegistryValue> {
        let type_name = type_name.into();
        trace!(type_name = %type_name, value = ?value, "Container set");
        self.entries.insert(type_name, value)
    }

    /// Store `value` under the type name of `T`
    ///
    /// Uses `std::any::type_name::<T>()`, the same key `ParameterSpec::of`
    /// declares.
    pub fn set_instance<T: Any + Send + Sync>(&self, value: T) -> Option<RegistryValue> {
        self.set(type_name::<T>(), RegistryValue::instance(value))
    }

    /// Store an already shared `value` under the type name of `T`
    pub fn set_shared<T: Any + Send + Sync>(&self, value: Arc<T>) -> Option<RegistryValue> {
        self.set(type_name::<T>(), RegistryValue::Instance(value))
    }

    /// Store a null entry under the type name of `T`
    pub fn set_null<T: Any>(&self) -> Option<RegistryValue> {
        self.set(type_name::<T>(), RegistryValue::Null)
    }

    /// Store a JSON value under `type_name`; JSON null becomes a null entry
    pub fn set_json(&self, type_name: impl Into<String>, value: serde_json::Value) -> Option<RegistryValue> {
        self.set(type_name, RegistryValue::from(value))
    }

    /// Builder form of [`set_instance`](Self::set_instance)
    #[must_use]
    pub fn with_instance<T: Any + Send + Sync>(self, value: T) -> Self {
        self.set_instance(value);
        self
    }

    /// Remove the entry for `type_name`
    pub fn remove(&self, type_name: &str) -> Option<RegistryValue> {
        self.entries.remove(type_name).map(|(_, value)| value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, type_name: &str) -> Option<RegistryValue> {
        self.entries.get(type_name).map(|entry| entry.value().clone())
    }

    /// Keys of all entries, sorted
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|entry| entry.key().clone()).collect();
        names.sort_unstable();
        names
    }
}

impl ServiceRegistry for Container {
    fn has(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    fn get(&self, type_name: &str) -> Result<RegistryValue> {
        self.entry(type_name)
            .ok_or_else(|| Error::not_found(format!("Container does not contain {type_name}")))
    }

    fn lookup(&self, type_name: &str) -> Result<Option<RegistryValue>> {
        Ok(self.entry(type_name))
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("type_names", &self.type_names())
            .finish()
    }
}
