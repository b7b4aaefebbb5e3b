//! Injectable type entries collected via linkme distributed slices

use autowire_domain::TypeDefinition;

/// Registry entry for an injectable type
pub struct InjectableEntry {
    /// Human-readable description
    pub description: &'static str,
    /// Produces the type's metadata table
    pub definition: fn() -> TypeDefinition,
}

#[linkme::distributed_slice]
pub static INJECTABLE_TYPES: [InjectableEntry] = [..];

/// List all registered injectable types
///
/// Returns (type name, description) pairs sorted by type name.
pub fn list_injectable_types() -> Vec<(String, &'static str)> {
    let mut types: Vec<(String, &'static str)> = INJECTABLE_TYPES
        .iter()
        .map(|entry| ((entry.definition)().type_name().to_string(), entry.description))
        .collect();
    types.sort_by(|a, b| a.0.cmp(&b.0));
    types
}
