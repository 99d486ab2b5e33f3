//! Indexed set, append, remove and clear

use crate::common::*;

#[test]
fn indexed_set_on_empty_matches_append() {
    let mut by_index = TypedArray::<Foo>::new().unwrap();
    by_index.set(0, foo_spec(1, "Ray")).unwrap();
    by_index.set(1, foo_spec(2, "Bob")).unwrap();

    let mut by_append = TypedArray::<Foo>::new().unwrap();
    by_append.append(foo_spec(1, "Ray")).unwrap();
    by_append.append(foo_spec(2, "Bob")).unwrap();

    assert_eq!(by_index.to_plain_data(), by_append.to_plain_data());
    assert_eq!(by_index, by_append);
}

#[test]
fn overwrite_keeps_position_and_length() {
    init_tracing();
    let mut foos = three_foos();

    let index = foos.set(0, foo_spec(10, "Raymond")).unwrap();

    assert_eq!(index, 0);
    assert_eq!(foos.len(), 3);
    assert_eq!(
        foos.to_plain_data(),
        vec![foo_row(10, "Raymond"), foo_row(2, "Bob"), foo_row(3, "Alice")]
    );
}

#[test]
fn failed_overwrite_keeps_old_element() {
    let mut foos = three_foos();
    let err = foos
        .set(1, ElementSpec::<Foo>::positional([Value::Int(2)]))
        .unwrap_err();

    assert!(matches!(err, Error::Arity { .. }));
    assert_eq!(foos[1], Foo::new(2, "Bob"));
}

#[test]
fn append_after_sparse_set_continues_past_highest_index() {
    let mut foos = TypedArray::<Foo>::new().unwrap();
    foos.set(5, foo_spec(1, "Ray")).unwrap();
    foos.set(2, foo_spec(2, "Bob")).unwrap();

    assert_eq!(foos.append(foo_spec(3, "Alice")).unwrap(), 6);
    assert_eq!(foos.indices().collect::<Vec<_>>(), vec![5, 2, 6]);
}

#[test]
fn append_never_replaces_element_at_last_index() {
    init_tracing();
    let mut foos = TypedArray::<Foo>::new().unwrap();
    foos.set(usize::MAX, foo_spec(1, "Ray")).unwrap();

    let err = foos.append(foo_spec(2, "Bob")).unwrap_err();
    assert_eq!(err.code(), "configuration_error");
    assert_eq!(foos.len(), 1);
    assert_eq!(foos.to_plain_data(), vec![foo_row(1, "Ray")]);

    let err = foos
        .append_value(Value::from(serde_json::json!({"id": 3, "name": "Alice"})))
        .unwrap_err();
    assert_eq!(err.code(), "configuration_error");
    assert_eq!(foos[usize::MAX], Foo::new(1, "Ray"));
}

#[test]
fn append_up_to_last_index_succeeds_once() {
    let mut foos = TypedArray::<Foo>::new().unwrap();
    foos.set(usize::MAX - 1, foo_spec(1, "Ray")).unwrap();

    assert_eq!(foos.append(foo_spec(2, "Bob")).unwrap(), usize::MAX);
    assert!(foos.append(foo_spec(3, "Alice")).is_err());
    assert_eq!(foos.len(), 2);
}

#[test]
fn slot_from_option_selects_index_or_end() {
    let mut foos = three_foos();

    assert_eq!(foos.set_slot(Slot::from(Some(1usize)), foo_spec(20, "Bobby")).unwrap(), 1);
    assert_eq!(foos.set_slot(Slot::from(None::<usize>), foo_spec(4, "Dan")).unwrap(), 3);
    assert_eq!(foos.len(), 4);
}

#[test]
fn pre_built_instances_are_stored_as_is() {
    let mut foos = TypedArray::<Foo>::new().unwrap();
    foos.append(Foo::new(7, "Seven")).unwrap();
    foos.append_value(Value::instance(Foo::new(8, "Eight"))).unwrap();

    assert_eq!(foos.to_plain_data(), vec![foo_row(7, "Seven"), foo_row(8, "Eight")]);
}

#[test]
fn foreign_instance_is_rejected() {
    let mut foos = TypedArray::<Foo>::new().unwrap();
    let task = Task {
        title: "review".to_string(),
        owner: Foo::new(1, "Ray"),
        score: 1.0,
    };

    let err = foos.append_value(Value::instance(task)).unwrap_err();

    assert_eq!(
        err,
        Error::type_mismatch("element", "instance of Foo", "instance of Task")
    );
    assert!(foos.is_empty());
}

#[test]
fn remove_and_clear() {
    let mut foos = three_foos();

    assert_eq!(foos.remove(0), Some(Foo::new(1, "Ray")));
    assert_eq!(foos.remove(0), None);
    assert_eq!(foos.iter().map(|f| f.id).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(foos.append(foo_spec(4, "Dan")).unwrap(), 3);

    foos.clear();
    assert!(foos.is_empty());
    assert_eq!(foos.append(foo_spec(1, "Ray")).unwrap(), 0);
}

#[test]
fn elements_are_mutable_in_place() {
    let mut foos = three_foos();
    if let Some(foo) = foos.get_mut(2) {
        foo.name.push_str(" Smith");
    }
    assert_eq!(foos[2].name, "Alice Smith");
}
