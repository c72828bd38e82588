//! The eager, ordered, keyed `Collection`.
//!
//! Entries are stored as `(Key, V)` pairs in iteration order. Keys are unique
//! within one collection. Every operation in this crate either returns a new
//! collection or, for the explicitly in-place ones (`push`, `prepend`, `pop`,
//! `put`, `forget`, `transform`), mutates the receiver.

use std::collections::HashMap;
use std::ops::Index;

use collectrs_core::prelude::*;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// How an operation assigns keys to the entries it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyPolicy {
    /// Drop original keys; number the result `0..n`.
    Reindex,
    /// Carry each value's original key.
    Preserve,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<V> {
    pub(crate) entries: Vec<(Key, V)>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// Build a collection from values, keyed `0..n`.
pub fn collect<V, I>(items: I) -> Collection<V>
where
    I: IntoIterator<Item = V>,
{
    items.into_iter().collect()
}

impl<V> Collection<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit `(key, value)` pairs. A repeated key overwrites the
    /// earlier value in place.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(Key, V)> = Vec::new();
        let mut slots: HashMap<Key, usize> = HashMap::new();
        for (k, v) in pairs {
            let key = k.into();
            match slots.get(&key) {
                Some(&idx) => entries[idx].1 = v,
                None => {
                    slots.insert(key.clone(), entries.len());
                    entries.push((key, v));
                }
            }
        }
        Self { entries }
    }

    /// Wrap entries whose keys are already known to be unique.
    pub(crate) fn from_entries(entries: Vec<(Key, V)>) -> Self {
        Self { entries }
    }

    pub(crate) fn with_policy(entries: Vec<(Key, V)>, policy: KeyPolicy) -> Self {
        match policy {
            KeyPolicy::Preserve => Self::from_entries(entries),
            KeyPolicy::Reindex => entries.into_iter().map(|(_, v)| v).collect(),
        }
    }

    /// True when keys are exactly `0..n` in iteration order.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(pos, (key, _))| *key == Key::Index(pos as i64))
    }

    /// The next integer key `push` would assign.
    pub(crate) fn next_index(&self) -> i64 {
        self.entries
            .iter()
            .filter_map(|(k, _)| k.as_index())
            .max()
            .map_or(0, |max| max + 1)
    }

    pub(crate) fn position_of(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn contains_one_item(&self) -> bool {
        self.entries.len() == 1
    }

    /// The full key/value association, in iteration order.
    pub fn all(&self) -> &[(Key, V)] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Key, V)> {
        self.entries.iter()
    }

    pub fn values_iter(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn keys_iter(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in iteration order, keys dropped.
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values_iter().cloned().collect()
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    pub fn into_entries(self) -> Vec<(Key, V)> {
        self.entries
    }

    /// Multiset equality over values: order and keys are ignored, counts are not.
    pub fn eq_canonicalizing<'a, I>(&self, other: I) -> bool
    where
        V: PartialEq + 'a,
        I: IntoIterator<Item = &'a V>,
    {
        let mut pool: Vec<&V> = self.values_iter().collect();
        for candidate in other {
            match pool.iter().position(|v| *v == candidate) {
                Some(idx) => {
                    pool.swap_remove(idx);
                }
                None => return false,
            }
        }
        pool.is_empty()
    }

    /// Serialize as JSON: an array for `0..n` keys, an object otherwise.
    pub fn to_json(&self) -> Result<String>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .enumerate()
                .map(|(pos, v)| (Key::Index(pos as i64), v))
                .collect(),
        }
    }
}

impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let mut next = self.next_index();
        for v in iter {
            self.entries.push((Key::Index(next), v));
            next += 1;
        }
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = &'a (Key, V);
    type IntoIter = std::slice::Iter<'a, (Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> Index<usize> for Collection<V> {
    type Output = V;

    fn index(&self, idx: usize) -> &V {
        self.get(idx)
            .unwrap_or_else(|| panic!("no entry at key {idx}"))
    }
}

impl<V> Index<&str> for Collection<V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        self.get(name)
            .unwrap_or_else(|| panic!("no entry at key '{name}'"))
    }
}

impl<T: Clone> Sequence for Collection<T> {
    type Item = T;

    fn to_items(&self) -> Option<Vec<T>> {
        Some(self.to_vec())
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = s.serialize_seq(Some(self.len()))?;
            for (_, v) in &self.entries {
                seq.serialize_element(v)?;
            }
            seq.end()
        } else {
            let mut map = s.serialize_map(Some(self.len()))?;
            for (k, v) in &self.entries {
                map.serialize_entry(&k.to_string(), v)?;
            }
            map.end()
        }
    }
}
