//! Filtering, positional slicing and element lookup.

use collectrs_core::prelude::*;

use crate::collection::{Collection, KeyPolicy};

impl<V: Clone> Collection<V> {
    fn select<F>(&self, policy: KeyPolicy, mut keep: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let kept = self
            .entries
            .iter()
            .filter(|entry| keep(&entry.1))
            .cloned()
            .collect();
        Self::with_policy(kept, policy)
    }

    /// Position range `[start, end)` clamped to the collection.
    fn range(&self, start: usize, end: usize, policy: KeyPolicy) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::with_policy(self.entries[start..end].to_vec(), policy)
    }

    /// Keep values matching `pred`. A `0..n` list is renumbered; any other
    /// keying is preserved.
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let policy = if self.is_list() {
            KeyPolicy::Reindex
        } else {
            KeyPolicy::Preserve
        };
        self.select(policy, pred)
    }

    pub fn reject<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        self.filter(|v| !pred(v))
    }

    /// `(matching, rest)`, both numbered `0..n`.
    pub fn partition<F>(&self, mut pred: F) -> (Self, Self)
    where
        F: FnMut(&V) -> bool,
    {
        let (pass, fail): (Vec<V>, Vec<V>) = self.values_iter().cloned().partition(|v| pred(v));
        (pass.into_iter().collect(), fail.into_iter().collect())
    }

    /// Contiguous run starting at position `offset`; keys are kept.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Self {
        let end = match length {
            Some(n) => offset.saturating_add(n),
            None => self.len(),
        };
        self.range(offset, end, KeyPolicy::Preserve)
    }

    pub fn take(&self, n: usize) -> Self {
        self.range(0, n, KeyPolicy::Reindex)
    }

    pub fn take_last(&self, n: usize) -> Self {
        self.range(self.len().saturating_sub(n), self.len(), KeyPolicy::Reindex)
    }

    pub fn skip(&self, n: usize) -> Self {
        self.range(n, self.len(), KeyPolicy::Reindex)
    }

    /// Prefix of values for which `pred` holds; stops before the first failure.
    pub fn take_while<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let end = self
            .values_iter()
            .position(|v| !pred(v))
            .unwrap_or(self.len());
        self.range(0, end, KeyPolicy::Reindex)
    }

    /// Prefix up to, not including, the first value satisfying `pred`.
    pub fn take_until<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        self.take_while(|v| !pred(v))
    }

    pub fn skip_while<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        let start = self
            .values_iter()
            .position(|v| !pred(v))
            .unwrap_or(self.len());
        self.range(start, self.len(), KeyPolicy::Reindex)
    }

    /// Drop values until `pred` first holds; that value is kept.
    pub fn skip_until<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        self.skip_while(|v| !pred(v))
    }

    /// Consecutive chunks of at most `size` values. A zero size yields no chunks.
    pub fn chunk(&self, size: usize) -> Collection<Collection<V>> {
        if size == 0 {
            return Collection::new();
        }
        self.entries
            .chunks(size)
            .map(|chunk| Self::with_policy(chunk.to_vec(), KeyPolicy::Reindex))
            .collect()
    }

    /// Drop later duplicates, keeping the first occurrence and its key.
    pub fn unique(&self) -> Self
    where
        V: PartialEq,
    {
        let mut kept: Vec<(Key, V)> = Vec::new();
        for (key, value) in &self.entries {
            if !kept.iter().any(|(_, seen)| seen == value) {
                kept.push((key.clone(), value.clone()));
            }
        }
        Self::from_entries(kept)
    }
}

impl<V> Collection<V> {
    pub fn contains(&self, needle: &V) -> bool
    where
        V: PartialEq,
    {
        self.values_iter().any(|v| v == needle)
    }

    pub fn contains_where<F>(&self, pred: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.values_iter().any(pred)
    }

    pub fn first(&self) -> Option<&V> {
        self.values_iter().next()
    }

    pub fn first_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.values_iter().find(|v| pred(*v))
    }

    pub fn first_or_fail(&self) -> Result<&V> {
        self.first().ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!("first on empty collection");
            Error::Empty
        })
    }

    pub fn first_where_or_fail<F>(&self, pred: F) -> Result<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.first_where(pred).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.len(), "no value matched first_where");
            Error::NotFound
        })
    }

    pub fn last(&self) -> Option<&V> {
        self.values_iter().next_back()
    }

    pub fn last_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.values_iter().rev().find(|v| pred(*v))
    }

    pub fn last_or_fail(&self) -> Result<&V> {
        self.last().ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!("last on empty collection");
            Error::Empty
        })
    }
}
