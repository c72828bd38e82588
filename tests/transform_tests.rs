//! map / transform / spread / grouping-by-mapping / zip / concat / combine / collapse.

mod fixtures;

use collectrs_core::{record, Error, Key, Sequence, Value};
use collectrs_ops::{collect, Collection};
use fixtures::{one_to_ten, text, Person};

#[test]
fn test_map_returns_new_collection() {
    let numbers = collect([1, 2, 3]);
    let doubled = numbers.map(|v| v * 2);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
    assert_eq!(one_to_ten().map(|v| *v), one_to_ten());
}

#[test]
fn test_map_keeps_named_keys() {
    let scores = Collection::from_pairs([("fauzan", 100), ("rudi", 99)]);
    let halved = scores.map(|v| v / 2);
    assert_eq!(
        halved.all(),
        &[(Key::from("fauzan"), 50), (Key::from("rudi"), 49)]
    );

    let labelled = scores.map_with_keys(|k, v| format!("{k}={v}"));
    assert_eq!(labelled["rudi"], "rudi=99");
}

#[test]
fn test_transform_mutates_receiver() {
    let mut numbers = collect([1, 2, 3]);
    let before: *const Collection<i32> = &numbers;
    let returned: *const Collection<i32> = numbers.transform(|v| v * 2);
    assert!(std::ptr::eq(before, returned));
    assert_eq!(numbers.to_vec(), vec![2, 4, 6]);
}

#[test]
fn test_map_into() {
    let names = collect(["Susi", "Fajar", "Fahri"]);
    let people = names.map_into::<Person>();
    assert_eq!(
        people.to_vec(),
        vec![Person::new("Susi"), Person::new("Fajar"), Person::new("Fahri")]
    );
    assert_eq!(people[0].say_hello(), "Hello Susi");
    assert_eq!(people[1].say_hello(), "Hello Fajar");
    assert_eq!(people[2].say_hello(), "Hello Fahri");
}

#[test]
fn test_map_spread_tuples() {
    let names = collect([("Fauzan", "Nurhidayat"), ("Andi", "Hermawan")]);
    let people: Collection<Person> =
        names.map_spread(|first: &str, last: &str| Person::new(format!("{first} {last}")));
    assert_eq!(
        people.to_vec(),
        vec![Person::new("Fauzan Nurhidayat"), Person::new("Andi Hermawan")]
    );

    let triples = collect([(1, 2, 3), (4, 5, 6)]);
    let sums: Collection<i32> = triples.map_spread(|a: i32, b: i32, c: i32| a + b + c);
    assert_eq!(sums.to_vec(), vec![6, 15]);
}

#[test]
fn test_try_map_spread_on_runtime_sequences() {
    let rows = collect(vec![vec!["Fauzan", "Nurhidayat"], vec!["Andi", "Hermawan"]]);
    let people = rows
        .try_map_spread(|[first, last]: [&str; 2]| Person::new(format!("{first} {last}")))
        .expect("two names per row");
    assert_eq!(people[1], Person::new("Andi Hermawan"));
}

#[test]
fn test_try_map_spread_rejects_wrong_shape() {
    let rows = collect(vec![vec![1, 2], vec![3]]);
    match rows.try_map_spread(|[a, b]: [i32; 2]| a + b) {
        Err(Error::ShapeMismatch { key, expected, found }) => {
            assert_eq!(key, Key::Index(1));
            assert_eq!(expected, 2);
            assert_eq!(found, "1 items");
        }
        other => panic!("expected shape mismatch, got {other:?}"),
    }

    let values = collect(vec![Value::from(vec!["a", "b"]), Value::from("scalar")]);
    let err = values
        .try_map_spread(|[a, b]: [Value; 2]| format!("{a}{b}"))
        .unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { expected: 2, .. }));
}

#[test]
fn test_map_to_groups() {
    let rows = collect(vec![
        record! { "name" => "Fauzan", "department" => "IT" },
        record! { "name" => "Susi", "department" => "HR" },
        record! { "name" => "Rendy", "department" => "HR" },
        record! { "name" => "Andi", "department" => "IT" },
    ]);
    let groups = rows.map_to_groups(|row| (text(row, "department"), text(row, "name")));

    assert_eq!(groups.keys().to_vec(), vec![Key::from("IT"), Key::from("HR")]);
    assert_eq!(
        groups["IT"],
        collect(["Fauzan".to_string(), "Andi".to_string()])
    );
    assert_eq!(
        groups["HR"],
        collect(["Susi".to_string(), "Rendy".to_string()])
    );
}

#[test]
fn test_zip_pads_short_partner() {
    let left = collect([1, 2, 3, 7]);
    let right = collect([4, 5, 6]);
    let zipped = left.zip(&right);
    assert_eq!(
        zipped.to_vec(),
        vec![(1, Some(4)), (2, Some(5)), (3, Some(6)), (7, None)]
    );
    assert_eq!(right.zip(&left).len(), 3);
}

#[test]
fn test_concat_renumbers() {
    let left = collect([1, 2, 3]);
    let right = collect([4, 5, 6]);
    let joined = left.concat(&right);
    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    assert!(joined.is_list());

    let keyed = Collection::from_pairs([("a", 1)]);
    assert_eq!(keyed.concat(&right).keys().to_vec()[0], Key::Index(0));
}

#[test]
fn test_combine() {
    let keys = collect(["name", "country"]);
    let values = collect(["fauzan", "indonesia"]);
    let combined = keys.combine(&values).expect("same length");
    assert_eq!(
        combined.all(),
        &[
            (Key::from("name"), "fauzan"),
            (Key::from("country"), "indonesia")
        ]
    );
}

#[test]
fn test_combine_errors() {
    let err = collect(["only"]).combine(&collect([1, 2])).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { keys: 1, values: 2 }));

    let keys = collect(vec![Value::from(vec![1]), Value::from("ok")]);
    let err = keys.combine(&collect([1, 2])).unwrap_err();
    assert!(matches!(err, Error::InvalidKey(Key::Index(0))));
}

#[test]
fn test_collapse() {
    let nested = collect(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    let flat = nested.collapse();
    assert_eq!(flat.to_vec(), (1..=9).collect::<Vec<_>>());
    assert!(flat.eq_canonicalizing(&[9, 2, 4, 1, 3, 5, 6, 7, 8]));
    assert!(flat.is_list());

    let of_collections = collect(vec![collect([1, 2]), collect([3])]);
    assert_eq!(of_collections.collapse().to_vec(), vec![1, 2, 3]);

    let mixed = collect(vec![Value::from(vec![1, 2]), Value::Int(3), Value::from(vec![4])]);
    assert_eq!(
        mixed.collapse().to_vec(),
        vec![Value::Int(1), Value::Int(2), Value::Int(4)]
    );
}

#[test]
fn test_flat_map() {
    let rows = collect(vec![
        record! { "name" => "fauzan", "hobby" => vec!["coding", "watching"] },
        record! { "name" => "susi", "hobby" => vec!["reading", "hiking"] },
    ]);
    let hobbies = rows.flat_map(|row| {
        row.get("hobby")
            .and_then(|h| h.to_items())
            .unwrap_or_default()
    });
    assert_eq!(
        hobbies.to_vec(),
        vec![
            Value::from("coding"),
            Value::from("watching"),
            Value::from("reading"),
            Value::from("hiking"),
        ]
    );
    assert!(hobbies.is_list());
}

#[test]
fn test_keys_and_values() {
    let scores = Collection::from_pairs([("fauzan", 100), ("rudi", 99)]);
    assert_eq!(scores.values().all(), &[(Key::Index(0), 100), (Key::Index(1), 99)]);
    assert_eq!(scores.keys().to_vec(), vec![Key::from("fauzan"), Key::from("rudi")]);
}
