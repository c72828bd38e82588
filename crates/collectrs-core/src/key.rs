//! Keys addressing entries of a collection.
//!
//! A key is either an integer index or a string name. Collections built from
//! plain values carry the sequential indices `0..n`; keyed inputs (records,
//! `combine`, `group_by`) carry names.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => f.write_str(s),
        }
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(v: $t) -> Self {
                    Key::Index(v as i64)
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32, usize);

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Name(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Name(v)
    }
}

impl From<&String> for Key {
    fn from(v: &String) -> Self {
        Key::Name(v.clone())
    }
}

impl From<&Key> for Key {
    fn from(v: &Key) -> Self {
        v.clone()
    }
}

/// Values that may be promoted to a [`Key`] at runtime.
///
/// Used where a collection's *values* become keys (`combine`) or where a
/// record field selects a group. Returns `None` for values with no key form.
pub trait AsKey {
    fn as_key(&self) -> Option<Key>;
}

impl AsKey for Key {
    fn as_key(&self) -> Option<Key> {
        Some(self.clone())
    }
}

impl AsKey for str {
    fn as_key(&self) -> Option<Key> {
        Some(Key::Name(self.to_string()))
    }
}

impl AsKey for String {
    fn as_key(&self) -> Option<Key> {
        Some(Key::Name(self.clone()))
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Option<Key> {
        (**self).as_key()
    }
}

macro_rules! as_key_int {
    ($($t:ty),*) => {
        $(
            impl AsKey for $t {
                fn as_key(&self) -> Option<Key> {
                    Some(Key::Index(*self as i64))
                }
            }
        )*
    };
}

as_key_int!(i8, i16, i32, i64, u8, u16, u32, usize);
