//! Shared fixtures for autowire-application tests

#![allow(dead_code)]

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use autowire_application::{CatalogReflector, Resolver, TypeCatalog};
use autowire_domain::{
    Error, Injectable, ParameterSpec, RegistryValue, Result, ServiceRegistry, TypeDefinition,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimpleA {
    pub id: u32,
}

#[derive(Debug, Default)]
pub struct SimpleB;

#[derive(Debug, Default)]
pub struct SimpleC;

#[derive(Debug, Default)]
pub struct SimpleX;

impl Injectable for SimpleA {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(vec![], |_| Ok(Self::default()))
    }
}

impl Injectable for SimpleB {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(vec![], |_| Ok(Self))
    }
}

impl Injectable for SimpleC {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(vec![], |_| Ok(Self))
    }
}

impl Injectable for SimpleX {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(vec![], |_| Ok(Self))
    }
}

/// Requires `SimpleA`
pub struct DepsA {
    pub dep_a: Arc<SimpleA>,
}

impl Injectable for DepsA {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(
            vec![ParameterSpec::of::<SimpleA>("dep_a")],
            |args| Ok(Self { dep_a: args.required(0)? }),
        )
    }
}

/// Requires `SimpleA`, accepts a null `SimpleB`
pub struct DepsAoptsB {
    pub dep_a: Arc<SimpleA>,
    pub dep_b: Option<Arc<SimpleB>>,
}

impl DepsAoptsB {
    pub fn has_dep_b(&self) -> bool {
        self.dep_b.is_some()
    }
}

impl Injectable for DepsAoptsB {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(
            vec![
                ParameterSpec::of::<SimpleA>("dep_a"),
                ParameterSpec::of::<SimpleB>("dep_b").nullable(),
            ],
            |args| {
                Ok(Self {
                    dep_a: args.required(0)?,
                    dep_b: args.nullable(1)?,
                })
            },
        )
    }
}

/// Requires `SimpleA`, plus a defaulted string that happens to hold a type name
pub struct DepsAoptsCustom {
    pub dep_a: Arc<SimpleA>,
    pub dep_custom: String,
}

impl Injectable for DepsAoptsCustom {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(
            vec![
                ParameterSpec::of::<SimpleA>("dep_a"),
                ParameterSpec::of::<String>("dep_custom").optional(),
            ],
            |args| {
                let dep_custom = match args.nullable::<String>(1)? {
                    Some(value) => String::clone(&value),
                    None => type_name::<SimpleB>().to_string(),
                };
                Ok(Self {
                    dep_a: args.required(0)?,
                    dep_custom,
                })
            },
        )
    }
}

/// Requires `SimpleX`, which no registry provides
pub struct DepsX {
    pub dep_x: Arc<SimpleX>,
}

impl Injectable for DepsX {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_constructor(
            vec![ParameterSpec::of::<SimpleX>("dep_x")],
            |args| Ok(Self { dep_x: args.required(0)? }),
        )
    }
}

/// Has no `new` member, only a `Default` fallback
#[derive(Debug, Default)]
pub struct NoConstructor;

impl Injectable for NoConstructor {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>().with_default::<Self>()
    }
}

/// Minimal in-memory registry
#[derive(Default)]
pub struct MapRegistry {
    entries: HashMap<String, RegistryValue>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: Any + Send + Sync>(self, value: T) -> Self {
        self.with_value(type_name::<T>(), RegistryValue::instance(value))
    }

    pub fn with_arc<T: Any + Send + Sync>(self, value: Arc<T>) -> Self {
        self.with_value(type_name::<T>(), RegistryValue::Instance(value))
    }

    pub fn with_value(mut self, type_name: &str, value: RegistryValue) -> Self {
        self.entries.insert(type_name.to_string(), value);
        self
    }
}

impl ServiceRegistry for MapRegistry {
    fn has(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    fn get(&self, type_name: &str) -> Result<RegistryValue> {
        self.entries
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::not_found(type_name))
    }
}

pub fn fixture_catalog() -> Arc<TypeCatalog> {
    Arc::new(
        TypeCatalog::new()
            .with_type::<SimpleA>()
            .with_type::<SimpleB>()
            .with_type::<SimpleC>()
            .with_type::<SimpleX>()
            .with_type::<DepsA>()
            .with_type::<DepsAoptsB>()
            .with_type::<DepsAoptsCustom>()
            .with_type::<DepsX>()
            .with_type::<NoConstructor>(),
    )
}

pub fn resolver_with(registries: Vec<Arc<dyn ServiceRegistry>>) -> Resolver {
    let reflector = Arc::new(CatalogReflector::new(fixture_catalog()));
    registries
        .into_iter()
        .fold(Resolver::new(reflector), Resolver::with_registry)
}

pub fn name_of<T>() -> &'static str {
    type_name::<T>()
}
