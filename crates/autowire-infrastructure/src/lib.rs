//! # Autowire Infrastructure
//!
//! Cross-cutting concerns around the resolver:
//!
//! - [`container`] - the default concurrent [`ServiceRegistry`](autowire_domain::ServiceRegistry)
//! - [`config`] - figment-based configuration loading
//! - [`logging`] - tracing subscriber setup
//! - [`di`] - wiring configuration, catalog and registries together
//! - [`error_ext`] - context helpers for foreign errors

pub mod config;
pub mod constants;
pub mod container;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AutowireConfig, ConfigLoader, LoggingConfig};
pub use container::Container;
pub use di::{AutowireContext, bootstrap, build_context};
