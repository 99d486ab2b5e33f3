//! Primitive and nominal assertions through the public facade

use crate::common::*;
use typed_array::assert_type;

#[test]
fn integer_is_not_a_string() {
    init_tracing();
    let err = assert_type(Value::Int(1), &PrimitiveKind::String.into()).unwrap_err();

    assert_eq!(err, Error::type_mismatch("value", "string", "integer"));
    let msg = err.to_string();
    assert!(msg.contains("expected string"));
    assert!(msg.contains("integer given"));
}

#[test]
fn matching_string_is_returned_unchanged() {
    let value = assert_type(Value::from("Foo"), &PrimitiveKind::String.into()).unwrap();
    assert_eq!(value.as_str(), Some("Foo"));
}

#[test]
fn instance_of_expected_type_is_returned_unchanged() {
    let ray = Value::instance(Foo::new(1, "Ray"));
    let checked = assert_type(ray.clone(), &TypeDesignator::nominal::<Foo>()).unwrap();

    assert_eq!(checked, ray);
    let foo = checked
        .as_instance()
        .and_then(|instance| instance.downcast_ref::<Foo>())
        .cloned();
    assert_eq!(foo, Some(Foo::new(1, "Ray")));
}

#[test]
fn untyped_object_is_not_a_nominal_instance() {
    let record = Value::Record(foo_row(1, "Ray"));

    let err = assert_type(record.clone(), &TypeDesignator::nominal::<Foo>()).unwrap_err();
    assert_eq!(err, Error::type_mismatch("value", "instance of Foo", "object"));

    // The same record is a fine `object`
    assert_eq!(
        assert_type(record.clone(), &PrimitiveKind::Object.into()).unwrap(),
        record
    );
}

#[test]
fn instance_of_other_type_reports_both_names() {
    let task = Value::instance(Task {
        title: "review".to_string(),
        owner: Foo::new(1, "Ray"),
        score: 0.0,
    });

    let err = assert_type(task, &TypeDesignator::nominal::<Foo>()).unwrap_err();
    assert_eq!(
        err,
        Error::type_mismatch("value", "instance of Foo", "instance of Task")
    );
}

#[test]
fn json_values_check_against_kinds() {
    let cases = vec![
        (serde_json::json!("Foo"), PrimitiveKind::String),
        (serde_json::json!(1), PrimitiveKind::Integer),
        (serde_json::json!(1.23), PrimitiveKind::Float),
        (serde_json::json!(true), PrimitiveKind::Boolean),
        (serde_json::json!([1, 2, 3]), PrimitiveKind::Array),
        (serde_json::json!({"a": 1}), PrimitiveKind::Array),
    ];

    for (json, kind) in cases {
        let value = Value::from(json);
        assert!(
            assert_type(value.clone(), &kind.into()).is_ok(),
            "{} should be {}",
            value.describe(),
            kind
        );
    }
}
