//! Construction, iteration and in-place mutation.

mod fixtures;

use collectrs_core::{Error, Key, Value};
use collectrs_ops::{collect, Collection};
use fixtures::one_to_ten;

#[test]
fn test_create_collection() {
    let numbers = collect([1, 2, 3]);
    assert!(numbers.eq_canonicalizing(&[1, 2, 3]));
    assert_eq!(
        numbers.all(),
        &[(Key::Index(0), 1), (Key::Index(1), 2), (Key::Index(2), 3)]
    );
    assert!(numbers.is_list());
}

#[test]
fn test_canonical_equality_on_large_numbers() {
    let big = collect(vec![Value::Int(i64::MAX), Value::Int(i64::MAX - 1)]);
    let rounded = [Value::Float(i64::MAX as f64), Value::Float(i64::MAX as f64)];
    assert!(!big.eq_canonicalizing(&rounded));

    let exact = collect(vec![Value::Int(2), Value::Float(0.5)]);
    assert!(exact.eq_canonicalizing(&[Value::Float(0.5), Value::Float(2.0)]));
}

#[test]
fn test_iteration_yields_keys_in_order() {
    let numbers = collect(1..=9);
    for (key, value) in &numbers {
        assert_eq!(*key, Key::Index(*value as i64 - 1));
    }
    let owned: Vec<(Key, i32)> = numbers.into_iter().collect();
    assert_eq!(owned.len(), 9);
}

#[test]
fn test_push_pop_prepend() {
    let mut numbers: Collection<i32> = Collection::new();
    numbers.push_many([1, 2, 3]);
    assert_eq!(numbers.to_vec(), vec![1, 2, 3]);

    assert_eq!(numbers.pop(), Some(3));
    assert_eq!(numbers.to_vec(), vec![1, 2]);

    numbers.push(3);
    assert_eq!(numbers.all().last(), Some(&(Key::Index(2), 3)));

    numbers.prepend(0);
    assert_eq!(numbers.to_vec(), vec![0, 1, 2, 3]);
    assert!(numbers.is_list());
}

#[test]
fn test_pop_on_empty() {
    let mut empty: Collection<i32> = Collection::new();
    assert_eq!(empty.pop(), None);
    assert!(matches!(empty.pop_or_fail(), Err(Error::Empty)));
}

#[test]
fn test_push_continues_after_highest_index() {
    let mut sparse = Collection::from_pairs([(5, 'x')]);
    sparse.push('y');
    assert_eq!(sparse.get(6), Some(&'y'));
    assert_eq!(sparse.len(), 2);
}

#[test]
fn test_prepend_keeps_named_keys() {
    let mut mixed = Collection::from_pairs([(Key::from("name"), "fauzan"), (Key::Index(0), "x")]);
    mixed.prepend("first");
    assert_eq!(
        mixed.all(),
        &[
            (Key::Index(0), "first"),
            (Key::from("name"), "fauzan"),
            (Key::Index(1), "x"),
        ]
    );
}

#[test]
fn test_put_get_forget() {
    let mut person = Collection::from_pairs([("name", "fauzan")]);
    person.put("country", "indonesia").put("name", "rudi");

    assert_eq!(person.get("name"), Some(&"rudi"));
    assert_eq!(
        person.keys().to_vec(),
        vec![Key::from("name"), Key::from("country")]
    );
    assert!(person.has("country"));
    assert_eq!(person["country"], "indonesia");

    assert_eq!(person.forget("name"), Some("rudi"));
    assert!(!person.has("name"));
    assert_eq!(person.forget("name"), None);
}

#[test]
fn test_from_pairs_overwrites_in_place() {
    let pairs = Collection::from_pairs([(1, "a"), (0, "b"), (1, "c")]);
    assert_eq!(pairs.all(), &[(Key::Index(1), "c"), (Key::Index(0), "b")]);
    assert!(!pairs.is_list());
    assert_eq!(pairs[1], "c");
}

#[test]
fn test_cardinality_predicates() {
    let numbers = one_to_ten();
    assert!(numbers.is_not_empty());
    assert!(!numbers.is_empty());
    assert!(numbers.contains_where(|v| *v != 0));
    assert!(!numbers.contains_one_item());
    assert_eq!(numbers.count(), 10);

    assert!(collect([42]).contains_one_item());
    assert!(Collection::<i32>::new().is_empty());
}
