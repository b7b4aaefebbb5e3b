//! Demo types registered with the CLI so `autowire types` has something to show

use std::sync::Arc;

use autowire::{INJECTABLE_TYPES, Injectable, InjectableEntry, ParameterSpec, TypeDefinition};

#[derive(Debug, Default)]
pub struct SimpleA;

#[derive(Debug, Default)]
pub struct SimpleB;

#[allow(dead_code)]
#[derive(Debug)]
pub struct DepsAoptsB {
    pub dep_a: Arc<SimpleA>,
    pub dep_b: Option<Arc<SimpleB>>,
}

impl Injectable for SimpleA {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>()
            .with_constructor(vec![], |_| Ok(Self))
            .with_default::<Self>()
    }
}

impl Injectable for SimpleB {
    fn definition() -> TypeDefinition {
        TypeDefinition::of::<Self>()
            .with_constructor(vec![], |_| Ok(Self))
            .with_default::<Self>()
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

#[linkme::distributed_slice(INJECTABLE_TYPES)]
static SIMPLE_A: InjectableEntry = InjectableEntry {
    description: "Demo type without dependencies",
    definition: <SimpleA as Injectable>::definition,
};

#[linkme::distributed_slice(INJECTABLE_TYPES)]
static SIMPLE_B: InjectableEntry = InjectableEntry {
    description: "Demo type without dependencies",
    definition: <SimpleB as Injectable>::definition,
};

#[linkme::distributed_slice(INJECTABLE_TYPES)]
static DEPS_A_OPTS_B: InjectableEntry = InjectableEntry {
    description: "Demo type requiring SimpleA, accepting a null SimpleB",
    definition: <DepsAoptsB as Injectable>::definition,
};
