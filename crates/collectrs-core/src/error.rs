use thiserror::Error;

use crate::key::Key;

/// Canonical result for collectrs.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("collection is empty")]
    Empty,

    #[error("no item matched the predicate")]
    NotFound,

    #[error("item at key {key} cannot be spread into {expected} arguments (found {found})")]
    ShapeMismatch {
        key: Key,
        expected: usize,
        found: String,
    },

    #[error("cannot combine {keys} keys with {values} values")]
    LengthMismatch { keys: usize, values: usize },

    #[error("value at key {0} cannot be used as a key")]
    InvalidKey(Key),

    #[error("requested {requested} items but only {available} are available")]
    NotEnoughItems { requested: usize, available: usize },

    #[error("lazy sequence produced more than {0} items while materializing")]
    MaterializeLimit(usize),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}
