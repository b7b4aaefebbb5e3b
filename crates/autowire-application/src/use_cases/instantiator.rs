//! Instantiator
//!
//! Looks a type up in the catalog, resolves the arguments of its
//! constructor member and applies them positionally.

use std::any::{Any, type_name};
use std::sync::Arc;

use autowire_domain::{
    CallableDefinition, Error, Instance, MissingMethodPolicy, ResolvedArguments, Result,
    ServiceRegistry, Target,
};
use tracing::{debug, info};

use crate::catalog::TypeCatalog;
use crate::use_cases::Resolver;

/// Constructs catalogued types with resolved dependencies
#[derive(Debug, Clone)]
pub struct Instantiator {
    catalog: Arc<TypeCatalog>,
    resolver: Arc<Resolver>,
}

impl Instantiator {
    /// Create an instantiator over `catalog`, resolving through `resolver`
    pub fn new(catalog: Arc<TypeCatalog>, resolver: Arc<Resolver>) -> Self {
        Self { catalog, resolver }
    }

    /// The resolver used for argument lists
    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// The catalog types are looked up in
    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Construct `type_name` through `member`, or the configured constructor
    ///
    /// Fails with [`Error::TargetNotFound`] when the type is not catalogued.
    /// When the member does not exist, `on_missing_constructor` decides
    /// between the type's zero-argument fallback (the default) and a
    /// reflection error.
    pub fn instantiate(
        &self,
        type_name: &str,
        member: Option<&str>,
        extras: &[&dyn ServiceRegistry],
    ) -> Result<Instance> {
        let definition = self
            .catalog
            .get(type_name)
            .ok_or_else(|| Error::target_not_found(type_name))?;
        let member = self.resolver.member_or_default(member);

        let Some(found) = definition.member(member) else {
            let fallback = match self.resolver.options().on_missing_constructor {
                MissingMethodPolicy::TreatAsNoParameters => definition.fallback(),
                MissingMethodPolicy::Fail => None,
            };
            let construct = fallback.ok_or_else(|| {
                Error::reflection(format!(
                    "Method \"{member}\" does not exist in type \"{type_name}\""
                ))
            })?;
            debug!(type_name, member, "Constructing through fallback");
            return construct(&ResolvedArguments::empty());
        };

        let target = Target::Type(Arc::clone(&definition));
        let arguments = self
            .resolver
            .resolve_dependencies(&target, Some(member), extras)?;

        info!(type_name, member, arguments = arguments.len(), "Instantiating");
        (found.constructor)(&arguments)
    }

    /// Construct `T` and downcast the result
    pub fn instantiate_as<T: Any + Send + Sync>(
        &self,
        member: Option<&str>,
        extras: &[&dyn ServiceRegistry],
    ) -> Result<Arc<T>> {
        let name = type_name::<T>();
        self.instantiate(name, member, extras)?
            .downcast::<T>()
            .map_err(|_| Error::invalid_argument(format!("Constructor of \"{name}\" produced another type")))
    }

    /// Call a function-like value with resolved arguments
    pub fn invoke(
        &self,
        callable: &Arc<CallableDefinition>,
        extras: &[&dyn ServiceRegistry],
    ) -> Result<Instance> {
        let target = Target::Callable(Arc::clone(callable));
        let arguments = self.resolver.resolve_dependencies(&target, None, extras)?;

        debug!(callable = %callable.name, arguments = arguments.len(), "Invoking callable");
        (callable.function)(&arguments)
    }
}
