//! Plain data, JSON output and decoded-row input

use crate::common::*;
use serde_json::json;

#[test]
fn json_rows_seed_the_same_container_as_named_specs() {
    let rows = json!([
        {"id": 1, "name": "Ray"},
        {"id": 2, "name": "Bob"},
        {"id": 3, "name": "Alice"},
    ]);
    let values = match Value::from(rows) {
        Value::Array(values) => values,
        other => panic!("expected an array, got {}", other.describe()),
    };

    let from_rows = TypedArray::<Foo>::from_values(values).unwrap();

    assert_eq!(from_rows, three_foos());
}

#[test]
fn json_row_with_wrong_type_is_rejected() {
    let rows = vec![
        Value::from(json!({"id": 1, "name": "Ray"})),
        Value::from(json!({"id": 2.5, "name": "Bob"})),
    ];

    let err = TypedArray::<Foo>::from_values(rows).unwrap_err();

    assert_eq!(
        err,
        Error::type_mismatch("argument `id` of Foo", "integer", "float")
    );
}

#[test]
fn json_scalar_row_is_invalid_spec() {
    let err = TypedArray::<Foo>::from_values([Value::from(json!("Ray"))]).unwrap_err();
    assert_eq!(err.code(), "invalid_spec");
}

#[test]
fn to_json_round_trips_through_rows() {
    let foos = three_foos();
    let json = foos.to_json();

    assert_eq!(
        json,
        json!([
            {"id": 1, "name": "Ray"},
            {"id": 2, "name": "Bob"},
            {"id": 3, "name": "Alice"},
        ])
    );

    let rows = match Value::from(json) {
        Value::Array(rows) => rows,
        other => panic!("expected an array, got {}", other.describe()),
    };
    assert_eq!(TypedArray::<Foo>::from_values(rows).unwrap(), foos);
}

#[test]
fn serialized_rows_keep_field_order() {
    let text = serde_json::to_string(&three_foos()).unwrap();
    assert_eq!(
        text,
        r#"[{"id":1,"name":"Ray"},{"id":2,"name":"Bob"},{"id":3,"name":"Alice"}]"#
    );
}

#[test]
fn plain_data_fields_follow_declaration_order() {
    let foos = TypedArray::<Foo>::from_specs([ElementSpec::<Foo>::named([
        ("name", Value::from("Ray")),
        ("id", Value::Int(1)),
    ])])
    .unwrap();

    for row in foos.to_plain_data() {
        assert_eq!(row.keys().map(String::as_str).collect::<Vec<_>>(), vec!["id", "name"]);
    }

    let tasks = TypedArray::<Task>::from_instances([Task {
        title: "review".to_string(),
        owner: Foo::new(1, "Ray"),
        score: 0.0,
    }])
    .unwrap();
    assert_eq!(
        serde_json::to_string(&tasks).unwrap(),
        r#"[{"title":"review","owner":{"id":1,"name":"Ray"},"score":0.0}]"#
    );
}

#[test]
fn empty_container_has_empty_plain_data() {
    let foos = TypedArray::<Foo>::new().unwrap();
    assert!(foos.to_plain_data().is_empty());
    assert_eq!(foos.to_json(), json!([]));
}
