//! Catalog-backed type reflector
//!
//! Turns the metadata tables in a [`TypeCatalog`] into parameter
//! descriptors. Only single named parameter types reflect; untyped, union
//! and intersection parameters fail fast.

use std::sync::Arc;

use autowire_domain::{
    Error, ParameterDescriptor, ParameterSpec, Result, Target, TypeDefinition, TypeRef,
    TypeReflector,
};

use crate::catalog::TypeCatalog;

/// [`TypeReflector`] over a [`TypeCatalog`]
#[derive(Debug, Clone)]
pub struct CatalogReflector {
    catalog: Arc<TypeCatalog>,
}

impl CatalogReflector {
    /// Create a reflector over `catalog`
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog named targets are looked up in
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    fn named(&self, name: &str) -> Result<Arc<TypeDefinition>> {
        self.catalog
            .get(name)
            .ok_or_else(|| Error::reflection(format!("Type \"{name}\" does not exist")))
    }
}

impl TypeReflector for CatalogReflector {
    fn describe_parameters(&self, target: &Target, member: &str) -> Result<Vec<ParameterDescriptor>> {
        let definition = match target {
            Target::Callable(callable) => return describe_all(&callable.parameters, target),
            Target::Named(name) => self.named(name)?,
            Target::Type(definition) => Arc::clone(definition),
        };
        let found = definition.member(member).ok_or_else(|| {
            Error::reflection(format!(
                "Method \"{member}\" does not exist in type \"{}\"",
                definition.type_name()
            ))
        })?;
        describe_all(&found.parameters, target)
    }

    fn has_member(&self, target: &Target, member: &str) -> Result<bool> {
        match target {
            Target::Callable(_) => Ok(true),
            Target::Named(name) => Ok(self.named(name)?.has_member(member)),
            Target::Type(definition) => Ok(definition.has_member(member)),
        }
    }
}

fn describe_all(parameters: &[ParameterSpec], target: &Target) -> Result<Vec<ParameterDescriptor>> {
    parameters.iter().map(|spec| describe(spec, target)).collect()
}

fn describe(spec: &ParameterSpec, target: &Target) -> Result<ParameterDescriptor> {
    match &spec.type_ref {
        TypeRef::Named { name, type_id } => Ok(ParameterDescriptor {
            type_name: name.clone(),
            name: spec.name.clone(),
            allows_null: spec.allows_null,
            is_optional: spec.is_optional,
            type_id: *type_id,
        }),
        other => Err(Error::reflection(format!(
            "Parameter \"{}\" of \"{target}\" is not a single named type: {other}",
            spec.name
        ))),
    }
}
