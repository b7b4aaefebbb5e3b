use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased instance handed out by registries and constructors
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Value stored under a type name in a registry
///
/// A present key always maps to one of these variants, so `Null` is
/// distinguishable from a missing key.
#[derive(Clone)]
pub enum RegistryValue {
    /// An injectable instance
    Instance(Instance),
    /// The key is present with a null value
    Null,
    /// A non-instance value such as `false` or a number
    Scalar(serde_json::Value),
}

impl RegistryValue {
    /// Wrap a concrete value as an instance entry
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance(Arc::new(value))
    }

    /// Returns true for the `Null` variant
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The held instance, if this entry is one
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Concrete type identity of the held instance
    pub fn instance_type_id(&self) -> Option<TypeId> {
        self.as_instance().map(|instance| (**instance).type_id())
    }
}

impl fmt::Debug for RegistryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(_) => f.write_str("Instance(..)"),
            Self::Null => f.write_str("Null"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
        }
    }
}

impl From<serde_json::Value> for RegistryValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            other => Self::Scalar(other),
        }
    }
}
