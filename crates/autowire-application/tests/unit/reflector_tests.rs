//! Tests for the catalog-backed reflector

use autowire_application::CatalogReflector;
use autowire_domain::{
    CallableDefinition, Error, ParameterSpec, Target, TypeDefinition, TypeReflector,
};

use crate::common::{DepsAoptsB, SimpleA, SimpleB, fixture_catalog, name_of};

fn reflector() -> CatalogReflector {
    CatalogReflector::new(fixture_catalog())
}

#[test]
fn test_describes_constructor_parameters_in_order() {
    let descriptors = reflector()
        .describe_parameters(&Target::named(name_of::<DepsAoptsB>()), "new")
        .expect("describe");

    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].type_name, name_of::<SimpleA>());
    assert_eq!(descriptors[0].name, "dep_a");
    assert!(!descriptors[0].allows_null);
    assert!(!descriptors[0].is_optional);
    assert_eq!(descriptors[1].type_name, name_of::<SimpleB>());
    assert!(descriptors[1].allows_null);
    assert!(!descriptors[1].is_optional);
}

#[test]
fn test_missing_member_fails() {
    let result = reflector().describe_parameters(&Target::named(name_of::<SimpleA>()), "missing_method");
    assert!(matches!(result, Err(Error::Reflection { .. })));
}

#[test]
fn test_unknown_named_target_fails() {
    let reflector = reflector();
    let target = Target::named("DoesNotExist");
    assert!(matches!(reflector.describe_parameters(&target, "new"), Err(Error::Reflection { .. })));
    assert!(reflector.has_member(&target, "new").is_err());
}

#[test]
fn test_type_target_bypasses_catalog() {
    let definition = TypeDefinition::new("Uncatalogued")
        .with_constructor(vec![ParameterSpec::named("dep", "SimpleA")], |_| Ok(()));
    let descriptors = reflector()
        .describe_parameters(&Target::from(definition), "new")
        .expect("describe");
    assert_eq!(descriptors[0].type_name, "SimpleA");
    assert_eq!(descriptors[0].type_id, None);
}

#[test]
fn test_callable_ignores_member_name() {
    let callable = CallableDefinition::new(
        "handler",
        vec![ParameterSpec::of::<SimpleA>("a"), ParameterSpec::of::<SimpleB>("b").optional()],
        |_| Ok(()),
    );
    let target = Target::callable(callable);
    let reflector = reflector();

    let descriptors = reflector
        .describe_parameters(&target, "whatever")
        .expect("describe");
    assert_eq!(descriptors.len(), 2);
    assert!(descriptors[1].is_optional);
    assert!(reflector.has_member(&target, "whatever").expect("has_member"));
}

#[test]
fn test_untyped_union_and_intersection_fail_fast() {
    for spec in [
        ParameterSpec::untyped("x"),
        ParameterSpec::union("x", ["SimpleA", "SimpleB"]),
        ParameterSpec::intersection("x", ["SimpleA", "SimpleB"]),
    ] {
        let definition = TypeDefinition::new("Loose").with_constructor(vec![spec], |_| Ok(()));
        let result = reflector().describe_parameters(&Target::from(definition), "new");
        assert!(matches!(result, Err(Error::Reflection { .. })));
    }
}

#[test]
fn test_has_member() {
    let reflector = reflector();
    let target = Target::named(name_of::<SimpleA>());
    assert!(reflector.has_member(&target, "new").expect("has_member"));
    assert!(!reflector.has_member(&target, "build").expect("has_member"));
}

#[test]
fn test_object_target() {
    let value = SimpleA { id: 3 };
    let descriptors = reflector()
        .describe_parameters(&Target::object(&value), "new")
        .expect("describe");
    assert!(descriptors.is_empty());
}
