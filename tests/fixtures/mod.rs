//! Shared payloads for the integration tests.
#![allow(dead_code)]

use collectrs_core::{record, Value};
use collectrs_ops::{collect, Collection};

/// Value object built from a single name, used as a `map_into`/`map_spread` target.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn say_hello(&self) -> String {
        format!("Hello {}", self.name)
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Person::new(name)
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Person::new(name)
    }
}

pub fn one_to_ten() -> Collection<i32> {
    collect(1..=10)
}

pub fn employee(name: &str, department: &str) -> Value {
    record! { "name" => name, "department" => department }
}

pub fn employees() -> Collection<Value> {
    collect(vec![
        employee("Fauzan", "IT"),
        employee("Agus", "IT"),
        employee("Susi", "HR"),
        employee("Eko", "HR"),
    ])
}

/// String field of a record, empty when missing.
pub fn text(row: &Value, field: &str) -> String {
    row.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
