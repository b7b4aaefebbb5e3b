use crate::error::Result;
use crate::value_objects::RegistryValue;

/// Read side of a service registry
///
/// Resolution only ever reads registries. Writing is left to the concrete
/// implementation.
pub trait ServiceRegistry: Send + Sync {
    /// Returns true if an entry exists for `type_name`, including a null entry
    fn has(&self, type_name: &str) -> bool;

    /// Entry for `type_name`
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when absent.
    fn get(&self, type_name: &str) -> Result<RegistryValue>;

    /// Entry for `type_name`, or `None` when the key is absent
    ///
    /// A present null entry is `Some(RegistryValue::Null)`. Once `has`
    /// reports the key, a failing `get` is returned as the error.
    fn lookup(&self, type_name: &str) -> Result<Option<RegistryValue>> {
        if self.has(type_name) {
            self.get(type_name).map(Some)
        } else {
            Ok(None)
        }
    }
}
