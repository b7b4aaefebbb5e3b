use std::fmt;
use std::sync::Arc;

use crate::value_objects::{CallableDefinition, Injectable, TypeDefinition};

/// Something the reflector can describe
#[derive(Debug, Clone)]
pub enum Target {
    /// A type looked up by name in the catalog
    Named(String),
    /// A type whose definition the caller already holds
    Type(Arc<TypeDefinition>),
    /// A function-like value; member names are ignored
    Callable(Arc<CallableDefinition>),
}

impl Target {
    /// Target a catalogued type by name
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(type_name.into())
    }

    /// Target the type `T` through its own definition
    pub fn of<T: Injectable>() -> Self {
        Self::Type(Arc::new(T::definition()))
    }

    /// Target the type of an existing value
    pub fn object<T: Injectable>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Target a callable
    pub fn callable(definition: CallableDefinition) -> Self {
        Self::Callable(Arc::new(definition))
    }

    /// Type name or callable name, for diagnostics
    pub fn display_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Type(definition) => definition.type_name(),
            Self::Callable(callable) => &callable.name,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&str> for Target {
    fn from(type_name: &str) -> Self {
        Self::named(type_name)
    }
}

impl From<TypeDefinition> for Target {
    fn from(definition: TypeDefinition) -> Self {
        Self::Type(Arc::new(definition))
    }
}

impl From<CallableDefinition> for Target {
    fn from(definition: CallableDefinition) -> Self {
        Self::callable(definition)
    }
}
