//! Wiring
//!
//! Builds the catalog, resolver and instantiator from configuration.

pub mod bootstrap;

pub use bootstrap::{AutowireContext, bootstrap, build_context};
