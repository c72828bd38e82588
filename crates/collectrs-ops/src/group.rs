//! Grouping by a computed key or a record field.

use std::collections::HashMap;

use collectrs_core::prelude::*;

use crate::collection::{Collection, KeyPolicy};

/// Accumulates items per group, remembering first-seen group order.
pub(crate) struct Buckets<T> {
    groups: Vec<(Key, Vec<(Key, T)>)>,
    slots: HashMap<Key, usize>,
}

impl<T> Buckets<T> {
    pub(crate) fn new() -> Self {
        Self {
            groups: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, group: Key, key: Key, item: T) {
        match self.slots.get(&group) {
            Some(&idx) => self.groups[idx].1.push((key, item)),
            None => {
                self.slots.insert(group.clone(), self.groups.len());
                self.groups.push((group, vec![(key, item)]));
            }
        }
    }

    fn finish(self, policy: KeyPolicy) -> Collection<Collection<T>> {
        Collection::from_entries(
            self.groups
                .into_iter()
                .map(|(group, items)| (group, Collection::with_policy(items, policy)))
                .collect(),
        )
    }

    pub(crate) fn into_reindexed(self) -> Collection<Collection<T>> {
        self.finish(KeyPolicy::Reindex)
    }

    pub(crate) fn into_preserved(self) -> Collection<Collection<T>> {
        self.finish(KeyPolicy::Preserve)
    }
}

impl<V: Clone> Collection<V> {
    /// Bucket values by `f(value)`. Groups appear in first-seen order and each
    /// group numbers its members `0..n` in encounter order.
    pub fn group_by<K, F>(&self, mut f: F) -> Collection<Collection<V>>
    where
        K: Into<Key>,
        F: FnMut(&V) -> K,
    {
        let mut buckets = Buckets::new();
        for (key, value) in &self.entries {
            buckets.insert(f(value).into(), key.clone(), value.clone());
        }
        buckets.into_reindexed()
    }

    /// Like `group_by`, but members keep the key they had in `self`.
    pub fn group_by_preserving_keys<K, F>(&self, mut f: F) -> Collection<Collection<V>>
    where
        K: Into<Key>,
        F: FnMut(&V) -> K,
    {
        let mut buckets = Buckets::new();
        for (key, value) in &self.entries {
            buckets.insert(f(value).into(), key.clone(), value.clone());
        }
        buckets.into_preserved()
    }

    /// Group records by the value of `field`. Items lacking the field, or whose
    /// field cannot be a key, land in the empty-name group.
    pub fn group_by_field(&self, field: &str) -> Collection<Collection<V>>
    where
        V: Fields,
    {
        self.group_by(|v| {
            v.field(field)
                .and_then(|f| f.as_key())
                .unwrap_or_else(|| Key::Name(String::new()))
        })
    }
}
