//! # Autowire Domain
//!
//! Core types for constructor dependency resolution.
//!
//! This crate contains no resolution logic. It defines the vocabulary shared
//! by the application and infrastructure layers:
//!
//! - [`error`] - the error taxonomy returned by every operation
//! - [`value_objects`] - parameter descriptors, registry values, resolved
//!   arguments and the metadata tables types publish about themselves
//! - [`ports`] - the [`ServiceRegistry`](ports::ServiceRegistry) and
//!   [`TypeReflector`](ports::TypeReflector) traits

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ServiceRegistry, TypeReflector};
pub use value_objects::{
    CallableDefinition, Constructor, Injectable, Instance, MemberDefinition,
    MissingMethodPolicy, ParameterDescriptor, ParameterSpec, RegistryPrecedence, RegistryValue,
    ResolvedArgument, ResolvedArguments, ResolverOptions, Target, TypeDefinition, TypeRef,
};
