//! Dependency Resolver
//!
//! Fills the argument list of a target's member from an ordered chain of
//! registries. Each parameter is decided on its own, in declaration order:
//!
//! ```text
//! registry match ──► instance          (null entry only if nullable)
//!       │ none
//!       ▼
//! allows null ─────► Null
//!       │ no
//!       ▼
//! has default ─────► Omitted
//!       │ no
//!       ▼
//! UnmetDependency(type_name)
//! ```
//!
//! Resolution is one level deep: dependencies of the injected instances are
//! never resolved here.

use std::sync::Arc;

use autowire_domain::{
    Error, MissingMethodPolicy, ParameterDescriptor, RegistryPrecedence, RegistryValue,
    ResolvedArgument, ResolvedArguments, ResolverOptions, Result, ServiceRegistry, Target,
    TypeReflector,
};
use tracing::{debug, warn};

/// Resolves member arguments from configured and call-scoped registries
pub struct Resolver {
    reflector: Arc<dyn TypeReflector>,
    registries: Vec<Arc<dyn ServiceRegistry>>,
    options: ResolverOptions,
}

impl Resolver {
    /// Create a resolver with no registries and default options
    pub fn new(reflector: Arc<dyn TypeReflector>) -> Self {
        Self {
            reflector,
            registries: Vec::new(),
            options: ResolverOptions::default(),
        }
    }

    /// Replace the resolution options
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a registry to the configured chain
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn ServiceRegistry>) -> Self {
        self.add_registry(registry);
        self
    }

    /// Append a registry to the configured chain
    pub fn add_registry(&mut self, registry: Arc<dyn ServiceRegistry>) {
        self.registries.push(registry);
    }

    /// Configured registries in search order
    pub fn registries(&self) -> &[Arc<dyn ServiceRegistry>] {
        &self.registries
    }

    /// Active resolution options
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Member name to use when the caller passes `None`
    pub fn member_or_default<'a>(&'a self, member: Option<&'a str>) -> &'a str {
        member.unwrap_or(&self.options.constructor_member)
    }

    /// Parameter descriptors of `member` on `target`
    ///
    /// A missing member is always an error here, whatever the
    /// missing-method policy says.
    pub fn list_dependencies(
        &self,
        target: &Target,
        member: Option<&str>,
    ) -> Result<Vec<ParameterDescriptor>> {
        self.reflector
            .describe_parameters(target, self.member_or_default(member))
    }

    /// Resolve the argument list of `member` on `target`
    ///
    /// `extras` are consulted alongside the configured registries in the
    /// order given by [`RegistryPrecedence`].
    pub fn resolve_dependencies(
        &self,
        target: &Target,
        member: Option<&str>,
        extras: &[&dyn ServiceRegistry],
    ) -> Result<ResolvedArguments> {
        let member = self.member_or_default(member);

        if self.options.on_missing_method == MissingMethodPolicy::TreatAsNoParameters
            && !self.reflector.has_member(target, member)?
        {
            debug!(target_name = %target, member, "Member missing, resolving no parameters");
            return Ok(ResolvedArguments::empty());
        }

        let parameters = self.reflector.describe_parameters(target, member)?;
        let chain = self.search_order(extras);

        debug!(
            target_name = %target,
            member,
            parameters = parameters.len(),
            registries = chain.len(),
            "Resolving dependencies"
        );

        parameters
            .iter()
            .map(|parameter| resolve_parameter(parameter, &chain))
            .collect()
    }

    fn search_order<'a>(&'a self, extras: &'a [&'a dyn ServiceRegistry]) -> Vec<&'a dyn ServiceRegistry> {
        let base = self
            .registries
            .iter()
            .map(|registry| registry.as_ref() as &dyn ServiceRegistry);
        let extra = extras.iter().copied();

        match self.options.registry_precedence {
            RegistryPrecedence::BaseFirst => base.chain(extra).collect(),
            RegistryPrecedence::ExtrasFirst => extra.chain(base).collect(),
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registries", &self.registries.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn resolve_parameter(
    parameter: &ParameterDescriptor,
    chain: &[&dyn ServiceRegistry],
) -> Result<ResolvedArgument> {
    let type_name = parameter.type_name.as_str();
    let mut found = None;
    for registry in chain {
        if let Some(value) = registry.lookup(type_name)? {
            found = Some(value);
            break;
        }
    }

    let argument = match found {
        Some(RegistryValue::Instance(instance)) => {
            if let Some(expected) = parameter.type_id
                && (*instance).type_id() != expected
            {
                warn!(type_name, parameter = %parameter.name, "Registry instance has a different concrete type");
                return Err(Error::invalid_registry_value(type_name));
            }
            ResolvedArgument::Value(instance)
        }
        Some(RegistryValue::Null) if parameter.allows_null => ResolvedArgument::Null,
        Some(value @ (RegistryValue::Null | RegistryValue::Scalar(_))) => {
            warn!(type_name, parameter = %parameter.name, value = ?value, "Registry value is not injectable");
            return Err(Error::invalid_registry_value(type_name));
        }
        None if parameter.allows_null => ResolvedArgument::Null,
        None if parameter.is_optional => ResolvedArgument::Omitted,
        None => return Err(Error::unmet_dependency(type_name)),
    };

    debug!(type_name, parameter = %parameter.name, argument = ?argument, "Resolved parameter");
    Ok(argument)
}
