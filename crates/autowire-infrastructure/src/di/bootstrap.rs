//! Context bootstrap
//!
//! ```text
//! AutowireConfig ──► ResolverOptions ─┐
//! TypeCatalog ─────► CatalogReflector ┼─► Resolver ──► Instantiator
//! registries ─────────────────────────┘
//! ```

use std::sync::Arc;

use autowire_application::{CatalogReflector, Instantiator, Resolver, TypeCatalog};
use autowire_domain::ServiceRegistry;
use tracing::info;

use crate::config::AutowireConfig;

/// Everything needed to resolve and instantiate
#[derive(Debug, Clone)]
pub struct AutowireContext {
    /// Known type definitions
    pub catalog: Arc<TypeCatalog>,
    /// Resolver over the configured registries
    pub resolver: Arc<Resolver>,
    /// Instantiator sharing the same catalog and resolver
    pub instantiator: Instantiator,
}

/// Wire an explicit catalog and registry chain
///
/// Registries are searched in iteration order.
pub fn build_context<I>(config: &AutowireConfig, catalog: TypeCatalog, registries: I) -> AutowireContext
where
    I: IntoIterator<Item = Arc<dyn ServiceRegistry>>,
{
    let catalog = Arc::new(catalog);
    let reflector = Arc::new(CatalogReflector::new(Arc::clone(&catalog)));

    let mut resolver = Resolver::new(reflector).with_options(config.resolver.clone());
    for registry in registries {
        resolver.add_registry(registry);
    }
    let resolver = Arc::new(resolver);

    info!(
        types = catalog.len(),
        registries = resolver.registries().len(),
        precedence = ?config.resolver.registry_precedence,
        on_missing_method = ?config.resolver.on_missing_method,
        on_missing_constructor = ?config.resolver.on_missing_constructor,
        "Autowire context ready"
    );

    AutowireContext {
        instantiator: Instantiator::new(Arc::clone(&catalog), Arc::clone(&resolver)),
        catalog,
        resolver,
    }
}

/// Wire every auto-registered type with the given registry chain
pub fn bootstrap<I>(config: &AutowireConfig, registries: I) -> AutowireContext
where
    I: IntoIterator<Item = Arc<dyn ServiceRegistry>>,
{
    build_context(config, TypeCatalog::discover(), registries)
}
