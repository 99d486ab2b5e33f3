//! Textual designators resolved through a TypeRegistry

use crate::common::*;
use typed_array::assert_type_named;

fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .with::<Foo>()
        .and_then(TypeRegistry::with::<Task>)
        .unwrap()
}

#[test]
fn primitive_tags_resolve_without_registration() {
    let registry = TypeRegistry::new();
    for tag in ["string", "integer", "float", "boolean", "array", "object"] {
        assert!(registry.resolve(tag).is_ok(), "{} should resolve", tag);
    }
}

#[test]
fn registered_names_resolve_to_nominal_designators() {
    let registry = registry();

    assert_eq!(registry.resolve("Foo").unwrap(), TypeDesignator::nominal::<Foo>());
    assert!(registry.contains("Task"));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Foo", "Task"]);
}

#[test]
fn named_assertions_follow_the_same_rules() {
    let registry = registry();

    assert_eq!(
        assert_type_named(Value::from("Foo"), "string", &registry).unwrap(),
        Value::from("Foo")
    );

    let err = assert_type_named(Value::Int(1), "string", &registry).unwrap_err();
    assert_eq!(err, Error::type_mismatch("value", "string", "integer"));

    let ray = Value::instance(Foo::new(1, "Ray"));
    assert_eq!(registry.assert(ray.clone(), "Foo").unwrap(), ray);
    assert!(registry.assert(ray, "Task").is_err());
}

#[test]
fn unknown_designator_is_configuration_error() {
    let err = assert_type_named(Value::Int(1), "int", &registry()).unwrap_err();

    assert_eq!(err.code(), "configuration_error");
    assert!(err.to_string().contains("`int`"));
}

#[test]
fn registering_a_primitive_tag_is_rejected() {
    #[derive(Debug, Clone)]
    struct Shadow;

    impl Nominal for Shadow {
        const TYPE_NAME: &'static str = "string";

        fn fields(&self) -> Fields {
            Fields::new()
        }
    }

    let err = TypeRegistry::new().with::<Shadow>().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
