//! Tests for instantiation through the catalog

use std::any::type_name;
use std::sync::Arc;

use autowire_application::Instantiator;
use autowire_domain::{
    CallableDefinition, Error, MissingMethodPolicy, ParameterSpec, ResolverOptions,
    ServiceRegistry, Target,
};

use crate::common::{
    DepsA, DepsAoptsB, DepsAoptsCustom, DepsX, MapRegistry, NoConstructor, SimpleA, SimpleB,
    SimpleX, fixture_catalog, name_of, resolver_with,
};

fn instantiator(registries: Vec<Arc<dyn ServiceRegistry>>) -> Instantiator {
    Instantiator::new(fixture_catalog(), Arc::new(resolver_with(registries)))
}

fn only_a() -> Arc<dyn ServiceRegistry> {
    Arc::new(MapRegistry::new().with(SimpleA { id: 5 }))
}

#[test]
fn test_instantiate_simple_types() {
    let instantiator = instantiator(vec![]);
    let a = instantiator.instantiate_as::<SimpleA>(None, &[]).expect("SimpleA");
    assert_eq!(*a, SimpleA::default());
    assert!(instantiator.instantiate(name_of::<SimpleB>(), None, &[]).is_ok());
}

#[test]
fn test_instantiate_missing_type_fails() {
    let result = instantiator(vec![]).instantiate("DoesNotExist", None, &[]);
    assert!(matches!(result, Err(Error::TargetNotFound { ref type_name }) if type_name == "DoesNotExist"));
}

#[test]
fn test_instantiate_with_met_required_dependency() {
    let deps = instantiator(vec![only_a()])
        .instantiate_as::<DepsA>(None, &[])
        .expect("DepsA");
    assert_eq!(deps.dep_a.id, 5);
}

#[test]
fn test_instantiate_with_unmet_nullable_dependency() {
    let deps = instantiator(vec![only_a()])
        .instantiate_as::<DepsAoptsB>(None, &[])
        .expect("DepsAoptsB");
    assert_eq!(deps.dep_a.id, 5);
    assert!(!deps.has_dep_b());
}

#[test]
fn test_instantiate_with_met_nullable_dependency() {
    let registry: Arc<dyn ServiceRegistry> =
        Arc::new(MapRegistry::new().with(SimpleA::default()).with(SimpleB));
    let deps = instantiator(vec![registry])
        .instantiate_as::<DepsAoptsB>(None, &[])
        .expect("DepsAoptsB");
    assert!(deps.has_dep_b());
}

#[test]
fn test_instantiate_uses_declared_default() {
    let deps = instantiator(vec![only_a()])
        .instantiate_as::<DepsAoptsCustom>(None, &[])
        .expect("DepsAoptsCustom");
    assert_eq!(deps.dep_custom, type_name::<SimpleB>());
}

#[test]
fn test_instantiate_with_unmet_required_dependency_fails() {
    let result = instantiator(vec![only_a()]).instantiate(name_of::<DepsX>(), None, &[]);
    match result {
        Err(Error::UnmetDependency { type_name }) => assert_eq!(type_name, name_of::<SimpleX>()),
        Err(other) => panic!("expected UnmetDependency, got {other:?}"),
        Ok(_) => panic!("expected UnmetDependency"),
    }
}

#[test]
fn test_instantiate_with_extra_registry() {
    let extra = MapRegistry::new().with(SimpleX);
    let deps = instantiator(vec![])
        .instantiate_as::<DepsX>(None, &[&extra])
        .expect("DepsX");
    assert!(Arc::strong_count(&deps.dep_x) >= 1);
}

#[test]
fn test_missing_constructor_defaults_to_zero_arguments() {
    let default = instantiator(vec![]);
    assert!(default.instantiate_as::<NoConstructor>(None, &[]).is_ok());

    // Without a fallback constructor there is nothing to call
    assert!(matches!(
        default.instantiate(name_of::<SimpleA>(), Some("build"), &[]),
        Err(Error::Reflection { .. })
    ));

    // Resolution and listing still fail on the same member
    let target = Target::named(name_of::<NoConstructor>());
    assert!(default.resolver().resolve_dependencies(&target, None, &[]).is_err());
    assert!(default.resolver().list_dependencies(&target, None).is_err());
}

#[test]
fn test_missing_constructor_policy_fail() {
    let resolver = resolver_with(vec![]).with_options(ResolverOptions {
        on_missing_constructor: MissingMethodPolicy::Fail,
        ..ResolverOptions::default()
    });
    let strict = Instantiator::new(fixture_catalog(), Arc::new(resolver));

    assert!(matches!(
        strict.instantiate(name_of::<NoConstructor>(), None, &[]),
        Err(Error::Reflection { .. })
    ));
}

#[test]
fn test_invoke_callable() {
    let callable = Arc::new(CallableDefinition::new(
        "describe",
        vec![
            ParameterSpec::of::<SimpleA>("a"),
            ParameterSpec::of::<SimpleB>("b").nullable(),
        ],
        |args| {
            let a = args.required::<SimpleA>(0)?;
            let b = args.nullable::<SimpleB>(1)?;
            Ok(format!("a={} b={}", a.id, b.is_some()))
        },
    ));

    let result = instantiator(vec![only_a()])
        .invoke(&callable, &[])
        .expect("invoke")
        .downcast::<String>()
        .expect("string result");
    assert_eq!(result.as_str(), "a=5 b=false");
}
