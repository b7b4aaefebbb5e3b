//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceRegistry`] | Type-name keyed lookup of injectable values |
//! | [`TypeReflector`] | Describes the parameters of a target's member |

/// Registry port
pub mod registry;
/// Reflection port
pub mod reflector;

pub use reflector::TypeReflector;
pub use registry::ServiceRegistry;
