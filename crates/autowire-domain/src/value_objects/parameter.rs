use std::any::TypeId;

use serde::Serialize;

/// Reflected metadata for one constructor parameter
///
/// Position in the descriptor list is the argument position. Serializes with
/// the keys `typeName`, `name`, `allowsNull` and `isOptional`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Declared type name, used as the registry key
    pub type_name: String,
    /// Parameter name
    pub name: String,
    /// Whether null is an acceptable value
    pub allows_null: bool,
    /// Whether the parameter has a declared default
    pub is_optional: bool,
    /// Concrete type identity, when the declaring metadata knows it
    #[serde(skip)]
    pub type_id: Option<TypeId>,
}

impl ParameterDescriptor {
    /// Neither nullable nor optional
    pub fn is_required(&self) -> bool {
        !self.allows_null && !self.is_optional
    }
}
