//! JSON output and JSON-sourced records.

mod fixtures;

use collectrs_core::{record, Key, Value};
use collectrs_ops::{collect, Collection};
use fixtures::{employees, text};

#[test]
fn test_list_serializes_as_array() {
    let numbers = collect([1, 2, 3]);
    assert_eq!(numbers.to_json().unwrap(), "[1,2,3]");

    let empty: Collection<i32> = Collection::new();
    assert_eq!(empty.to_json().unwrap(), "[]");
}

#[test]
fn test_keyed_collection_serializes_as_object() {
    let named = Collection::from_pairs([("name", "Eko"), ("country", "Indonesia")]);
    assert_eq!(
        named.to_json().unwrap(),
        r#"{"name":"Eko","country":"Indonesia"}"#
    );

    let sorted = collect([3, 1]).sort();
    assert_eq!(sorted.to_json().unwrap(), r#"{"1":1,"0":3}"#);
    assert_eq!(sorted.values().to_json().unwrap(), "[1,3]");
}

#[test]
fn test_grouped_records_to_json() {
    let grouped = employees().group_by_field("department");
    let json: serde_json::Value = serde_json::from_str(&grouped.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "IT": [
                { "name": "Fauzan", "department": "IT" },
                { "name": "Agus", "department": "IT" }
            ],
            "HR": [
                { "name": "Susi", "department": "HR" },
                { "name": "Eko", "department": "HR" }
            ]
        })
    );
}

#[test]
fn test_group_rows_parsed_from_json() {
    let raw = r#"[
        {"name": "Fauzan", "department": "IT", "age": 30},
        {"name": "Susi", "department": "HR", "age": 28.5},
        {"name": "Agus", "department": "IT"}
    ]"#;
    let rows: Vec<Value> = serde_json::from_str(raw).unwrap();
    let rows = collect(rows);

    let grouped = rows.group_by_field("department");
    assert_eq!(grouped.keys().to_vec(), vec![Key::from("IT"), Key::from("HR")]);
    assert_eq!(text(&grouped["IT"][1], "name"), "Agus");

    let ages = rows.map(|row| row.get("age").cloned().unwrap_or(Value::Null));
    assert_eq!(ages.average(), Some(29.25));
}

#[test]
fn test_record_macro_keeps_field_order() {
    let row = record! { "z" => 1, "a" => "x", "m" => Value::Null };
    assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"z":1,"a":"x","m":null}"#);
    assert_eq!(collect(vec![row]).to_json().unwrap(), r#"[{"z":1,"a":"x","m":null}]"#);
}
