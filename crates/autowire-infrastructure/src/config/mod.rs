//! Configuration
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. [`AutowireConfig::default()`]
//! 2. a TOML file (explicit path, or the first default location found)
//! 3. environment variables prefixed `AUTOWIRE__`, nested with `__`
//!    (e.g. `AUTOWIRE__RESOLVER__ON_MISSING_METHOD=treat_as_no_parameters`)

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AutowireConfig, LoggingConfig};
