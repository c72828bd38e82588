//! In-place mutation and keyed access.

use collectrs_core::prelude::*;

use crate::collection::Collection;

impl<V> Collection<V> {
    /// Append under the next integer key.
    pub fn push(&mut self, value: V) -> &mut Self {
        let key = Key::Index(self.next_index());
        self.entries.push((key, value));
        self
    }

    pub fn push_many<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.extend(values);
        self
    }

    /// Insert at the front. Integer keys are renumbered from 0; named keys
    /// keep their names.
    pub fn prepend(&mut self, value: V) -> &mut Self {
        let old = std::mem::take(&mut self.entries);
        let mut next = 0i64;
        let mut entries = Vec::with_capacity(old.len() + 1);
        for (key, v) in std::iter::once((Key::Index(0), value)).chain(old) {
            let key = match key {
                Key::Index(_) => {
                    let k = Key::Index(next);
                    next += 1;
                    k
                }
                named => named,
            };
            entries.push((key, v));
        }
        self.entries = entries;
        self
    }

    /// Remove and return the last value, `None` when empty.
    pub fn pop(&mut self) -> Option<V> {
        self.entries.pop().map(|(_, v)| v)
    }

    pub fn pop_or_fail(&mut self) -> Result<V> {
        self.pop().ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!("pop on empty collection");
            Error::Empty
        })
    }

    /// Set `key` to `value`, overwriting in place or appending.
    pub fn put<K: Into<Key>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        match self.position_of(&key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&V> {
        let key = key.into();
        self.position_of(&key).map(|pos| &self.entries[pos].1)
    }

    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        self.position_of(&key.into()).is_some()
    }

    /// Remove the entry at `key`. Remaining keys are left untouched.
    pub fn forget<K: Into<Key>>(&mut self, key: K) -> Option<V> {
        let pos = self.position_of(&key.into())?;
        Some(self.entries.remove(pos).1)
    }
}
