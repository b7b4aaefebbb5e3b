//! # Autowire
//!
//! Resolves constructor dependencies of a type from a chain of service
//! registries, then constructs it.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use autowire::{AutowireConfig, Container, Injectable, ParameterSpec, ServiceRegistry, TypeCatalog, TypeDefinition, build_context};
//!
//! impl Injectable for Mailer {
//!     fn definition() -> TypeDefinition {
//!         TypeDefinition::of::<Self>().with_constructor(
//!             vec![ParameterSpec::of::<Transport>("transport"), ParameterSpec::of::<Logger>("logger").nullable()],
//!             |args| Ok(Mailer { transport: args.required(0)?, logger: args.nullable(1)? }),
//!         )
//!     }
//! }
//!
//! let container = Arc::new(Container::new().with_instance(Transport::default()));
//! let context = build_context(
//!     &AutowireConfig::default(),
//!     TypeCatalog::new().with_type::<Mailer>(),
//!     [container as Arc<dyn ServiceRegistry>],
//! );
//! let mailer = context.instantiator.instantiate_as::<Mailer>(None, &[])?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and ports
//! - `application` - catalog, reflector, resolver and instantiator
//! - `infrastructure` - container, configuration, logging and wiring

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use autowire_domain::*;
}

/// Application layer - resolution use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use autowire_application::*;
}

/// Infrastructure layer - container, config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use autowire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::registry::{INJECTABLE_TYPES, InjectableEntry, list_injectable_types};
pub use application::{CatalogReflector, Instantiator, Resolver, TypeCatalog};
pub use infrastructure::{
    AutowireConfig, AutowireContext, ConfigLoader, Container, LoggingConfig, bootstrap,
    build_context,
};
