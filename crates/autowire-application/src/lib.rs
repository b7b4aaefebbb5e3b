//! # Autowire Application
//!
//! Dependency resolution use cases.
//!
//! - [`registry`] - compile-time registration of injectable types
//! - [`catalog`] - the runtime set of known type definitions
//! - [`reflector`] - the catalog-backed [`TypeReflector`](autowire_domain::TypeReflector)
//! - [`use_cases`] - the [`Resolver`] and [`Instantiator`]

pub mod catalog;
pub mod reflector;
pub mod registry;
pub mod use_cases;

pub use catalog::TypeCatalog;
pub use reflector::CatalogReflector;
pub use use_cases::{Instantiator, Resolver};
