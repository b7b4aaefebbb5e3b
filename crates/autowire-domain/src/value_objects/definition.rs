//! Metadata tables standing in for runtime reflection
//!
//! A type describes its constructor-like members once, as a
//! [`TypeDefinition`]. Each [`MemberDefinition`] pairs the declared
//! parameter list with a [`Constructor`] that builds the instance from a
//! positional [`ResolvedArguments`] list.
//!
//! ```ignore
//! impl Injectable for DepsAoptsB {
//!     fn definition() -> TypeDefinition {
//!         TypeDefinition::of::<Self>().with_constructor(
//!             vec![
//!                 ParameterSpec::of::<SimpleA>("dep_a"),
//!                 ParameterSpec::of::<SimpleB>("dep_b").nullable(),
//!             ],
//!             |args| Ok(Self { dep_a: args.required(0)?, dep_b: args.nullable(1)? }),
//!         )
//!     }
//! }
//! ```

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_CONSTRUCTOR_MEMBER;
use crate::error::Result;
use crate::value_objects::{Instance, ResolvedArguments};

/// Builds an instance from a positional argument list
pub type Constructor = Arc<dyn Fn(&ResolvedArguments) -> Result<Instance> + Send + Sync>;

fn erase<T, F>(build: F) -> Constructor
where
    T: Any + Send + Sync,
    F: Fn(&ResolvedArguments) -> Result<T> + Send + Sync + 'static,
{
    Arc::new(move |args: &ResolvedArguments| {
        build(args).map(|value| Arc::new(value) as Instance)
    })
}

/// Declared type of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A single concrete named type
    Named {
        /// Registry key for the type
        name: String,
        /// Concrete identity, when known
        type_id: Option<TypeId>,
    },
    /// No declared type
    Untyped,
    /// Any one of several types
    Union(Vec<String>),
    /// All of several types at once
    Intersection(Vec<String>),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, .. } => f.write_str(name),
            Self::Untyped => f.write_str("<untyped>"),
            Self::Union(names) => f.write_str(&names.join("|")),
            Self::Intersection(names) => f.write_str(&names.join("&")),
        }
    }
}

/// Declared parameter of a member or callable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name
    pub name: String,
    /// Declared type
    pub type_ref: TypeRef,
    /// Whether null is acceptable
    pub allows_null: bool,
    /// Whether a default exists
    pub is_optional: bool,
}

impl ParameterSpec {
    fn with_type(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            allows_null: false,
            is_optional: false,
        }
    }

    /// Parameter typed as the Rust type `T`
    ///
    /// The key is `std::any::type_name::<T>()`, which is only stable within
    /// one build, so registries must key entries the same way
    /// (e.g. `Container::set_instance`).
    pub fn of<T: Any>(name: impl Into<String>) -> Self {
        Self::with_type(
            name,
            TypeRef::Named {
                name: type_name::<T>().to_string(),
                type_id: Some(TypeId::of::<T>()),
            },
        )
    }

    /// Parameter typed by name only
    pub fn named(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_type(
            name,
            TypeRef::Named {
                name: type_name.into(),
                type_id: None,
            },
        )
    }

    /// Parameter without a declared type
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::with_type(name, TypeRef::Untyped)
    }

    /// Parameter declared as a union of types
    pub fn union<S: Into<String>>(name: impl Into<String>, types: impl IntoIterator<Item = S>) -> Self {
        Self::with_type(name, TypeRef::Union(types.into_iter().map(Into::into).collect()))
    }

    /// Parameter declared as an intersection of types
    pub fn intersection<S: Into<String>>(
        name: impl Into<String>,
        types: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_type(
            name,
            TypeRef::Intersection(types.into_iter().map(Into::into).collect()),
        )
    }

    /// Mark the parameter as accepting null
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.allows_null = true;
        self
    }

    /// Mark the parameter as having a default
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }
}

/// A constructor-like member of a type
#[derive(Clone)]
pub struct MemberDefinition {
    /// Member name, e.g. `new`
    pub name: String,
    /// Declared parameters in argument order
    pub parameters: Vec<ParameterSpec>,
    /// Builds the instance from resolved arguments
    pub constructor: Constructor,
}

impl MemberDefinition {
    /// Define a member producing values of type `T`
    pub fn new<T, F>(name: impl Into<String>, parameters: Vec<ParameterSpec>, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ResolvedArguments) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters,
            constructor: erase(build),
        }
    }
}

impl fmt::Debug for MemberDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Metadata a type publishes about itself
#[derive(Clone)]
pub struct TypeDefinition {
    type_name: String,
    type_id: Option<TypeId>,
    members: Vec<MemberDefinition>,
    fallback: Option<Constructor>,
}

impl TypeDefinition {
    /// Definition keyed by an arbitrary name
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            type_id: None,
            members: Vec::new(),
            fallback: None,
        }
    }

    /// Definition for the Rust type `T`, keyed by its type name
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: Some(TypeId::of::<T>()),
            ..Self::new(type_name::<T>())
        }
    }

    /// Add a member; a later member with the same name replaces the earlier one
    #[must_use]
    pub fn with_member(mut self, member: MemberDefinition) -> Self {
        self.members.retain(|existing| existing.name != member.name);
        self.members.push(member);
        self
    }

    /// Add the default constructor member
    #[must_use]
    pub fn with_constructor<T, F>(self, parameters: Vec<ParameterSpec>, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ResolvedArguments) -> Result<T> + Send + Sync + 'static,
    {
        self.with_member(MemberDefinition::new(
            DEFAULT_CONSTRUCTOR_MEMBER,
            parameters,
            build,
        ))
    }

    /// Zero-argument construction used when a requested member is missing
    /// and the resolver treats missing members as parameterless
    #[must_use]
    pub fn with_fallback<T, F>(mut self, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.fallback = Some(erase(move |_| Ok(build())));
        self
    }

    /// Fallback construction through `T::default()`
    #[must_use]
    pub fn with_default<T: Default + Any + Send + Sync>(self) -> Self {
        self.with_fallback(T::default)
    }

    /// Registry key of the type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Concrete identity, when known
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// Member by name
    pub fn member(&self, name: &str) -> Option<&MemberDefinition> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Returns true if the member exists
    pub fn has_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }

    /// All members in declaration order
    pub fn members(&self) -> &[MemberDefinition] {
        &self.members
    }

    /// Zero-argument fallback constructor
    pub fn fallback(&self) -> Option<&Constructor> {
        self.fallback.as_ref()
    }
}

impl fmt::Debug for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDefinition")
            .field("type_name", &self.type_name)
            .field("members", &self.members)
            .field("has_fallback", &self.fallback.is_some())
            .finish_non_exhaustive()
    }
}

/// A function-like value: a parameter list plus the function to call
#[derive(Clone)]
pub struct CallableDefinition {
    /// Name used in diagnostics
    pub name: String,
    /// Declared parameters in argument order
    pub parameters: Vec<ParameterSpec>,
    /// The function itself
    pub function: Constructor,
}

impl CallableDefinition {
    /// Define a callable returning values of type `T`
    pub fn new<T, F>(name: impl Into<String>, parameters: Vec<ParameterSpec>, function: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ResolvedArguments) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters,
            function: erase(function),
        }
    }
}

impl fmt::Debug for CallableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Types that publish a [`TypeDefinition`]
pub trait Injectable: Any + Send + Sync {
    /// Metadata table for the implementing type
    fn definition() -> TypeDefinition
    where
        Self: Sized;
}
