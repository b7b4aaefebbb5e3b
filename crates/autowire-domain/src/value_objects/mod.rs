//! Domain Value Objects
//!
//! Immutable values exchanged between the reflector, the registries and
//! the resolver.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ParameterDescriptor`] | Reflected metadata for one parameter |
//! | [`RegistryValue`] | Value stored under a type name in a registry |
//! | [`ResolvedArguments`] | Positional argument list handed to a constructor |
//! | [`TypeDefinition`] | Metadata table a type publishes about its members |
//! | [`Target`] | What a caller asks the resolver to introspect |
//! | [`ResolverOptions`] | Resolution policy knobs |

/// Resolved constructor arguments
pub mod arguments;
/// Type, member and callable metadata tables
pub mod definition;
/// Resolution policy
pub mod options;
/// Parameter descriptors
pub mod parameter;
/// Registry entry values
pub mod registry_value;
/// Introspection targets
pub mod target;

pub use arguments::{ResolvedArgument, ResolvedArguments};
pub use definition::{
    CallableDefinition, Constructor, Injectable, MemberDefinition, ParameterSpec, TypeDefinition,
    TypeRef,
};
pub use options::{MissingMethodPolicy, RegistryPrecedence, ResolverOptions};
pub use parameter::ParameterDescriptor;
pub use registry_value::{Instance, RegistryValue};
pub use target::Target;
