//! Reordering. Keys travel with their values; nothing here renumbers.

use std::cmp::Ordering;

use crate::collection::Collection;

impl<V: Clone> Collection<V> {
    /// Ascending natural order. Incomparable values (`NaN`) compare equal.
    pub fn sort(&self) -> Self
    where
        V: PartialOrd,
    {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    pub fn sort_desc(&self) -> Self
    where
        V: PartialOrd,
    {
        self.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
    }

    /// Stable sort by comparator.
    pub fn sort_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|(_, a), (_, b)| cmp(a, b));
        Self::from_entries(entries)
    }

    /// Stable sort by a derived key, computed once per value.
    pub fn sort_by_key<K, F>(&self, mut f: F) -> Self
    where
        K: PartialOrd,
        F: FnMut(&V) -> K,
    {
        let mut decorated: Vec<(K, usize)> = self
            .values_iter()
            .enumerate()
            .map(|(pos, v)| (f(v), pos))
            .collect();
        decorated.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self::from_entries(
            decorated
                .into_iter()
                .map(|(_, pos)| self.entries[pos].clone())
                .collect(),
        )
    }

    pub fn reverse(&self) -> Self {
        Self::from_entries(self.entries.iter().rev().cloned().collect())
    }
}
