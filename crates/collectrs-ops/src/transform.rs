//! Value-mapping and shape-changing operations.
//!
//! `map` and friends keep each value's key. Operations that build a new
//! sequence out of several sources (`flat_map`, `collapse`, `zip`, `concat`)
//! number their output `0..n`.

use collectrs_core::prelude::*;

use crate::collection::Collection;
use crate::group::Buckets;

/// Destructure a tuple positionally into the arguments of `F`.
pub trait Spread<F, R> {
    fn spread(self, f: &mut F) -> R;
}

macro_rules! spread_tuple {
    ($($T:ident $v:ident),+) => {
        impl<$($T,)+ R, F> Spread<F, R> for ($($T,)+)
        where
            F: FnMut($($T),+) -> R,
        {
            fn spread(self, f: &mut F) -> R {
                let ($($v,)+) = self;
                f($($v),+)
            }
        }
    };
}

spread_tuple!(A a);
spread_tuple!(A a, B b);
spread_tuple!(A a, B b, C c);
spread_tuple!(A a, B b, C c, D d);
spread_tuple!(A a, B b, C c, D d, E e);

impl<V> Collection<V> {
    pub fn map<R, F>(&self, mut f: F) -> Collection<R>
    where
        F: FnMut(&V) -> R,
    {
        Collection::from_entries(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), f(v)))
                .collect(),
        )
    }

    pub fn map_with_keys<R, F>(&self, mut f: F) -> Collection<R>
    where
        F: FnMut(&Key, &V) -> R,
    {
        Collection::from_entries(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
        )
    }

    /// Like `map`, but replaces the receiver's values and hands the receiver
    /// back. All new values are computed before any is written.
    pub fn transform<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&V) -> V,
    {
        let mapped: Vec<V> = self.entries.iter().map(|(_, v)| f(v)).collect();
        for ((_, slot), value) in self.entries.iter_mut().zip(mapped) {
            *slot = value;
        }
        self
    }

    /// Construct a `T` from each value.
    pub fn map_into<T>(&self) -> Collection<T>
    where
        V: Clone,
        T: From<V>,
    {
        self.map(|v| T::from(v.clone()))
    }

    /// Call `f` with each tuple's fields as separate arguments.
    pub fn map_spread<R, F>(&self, mut f: F) -> Collection<R>
    where
        V: Clone + Spread<F, R>,
    {
        self.map(|v| v.clone().spread(&mut f))
    }

    /// Spread runtime sequences (lists, `Vec`s) into exactly `N` arguments.
    ///
    /// Every item is checked before `f` runs; any item that is not a sequence
    /// of exactly `N` values fails the whole call with `ShapeMismatch`.
    pub fn try_map_spread<const N: usize, R, F>(&self, mut f: F) -> Result<Collection<R>>
    where
        V: Sequence,
        F: FnMut([V::Item; N]) -> R,
    {
        let mut args = Vec::with_capacity(self.len());
        for (key, value) in &self.entries {
            let items = value.to_items().ok_or_else(|| Error::ShapeMismatch {
                key: key.clone(),
                expected: N,
                found: "a scalar".into(),
            })?;
            let found = items.len();
            let fixed: [V::Item; N] = items.try_into().map_err(|_| Error::ShapeMismatch {
                key: key.clone(),
                expected: N,
                found: format!("{found} items"),
            })?;
            args.push((key.clone(), fixed));
        }
        Ok(Collection::from_entries(
            args.into_iter().map(|(k, a)| (k, f(a))).collect(),
        ))
    }

    /// `f` yields one `(group, item)` pair per value; items are gathered per
    /// group in encounter order.
    pub fn map_to_groups<K, R, F>(&self, mut f: F) -> Collection<Collection<R>>
    where
        K: Into<Key>,
        F: FnMut(&V) -> (K, R),
    {
        let mut buckets = Buckets::new();
        for (key, value) in &self.entries {
            let (group, item) = f(value);
            buckets.insert(group.into(), key.clone(), item);
        }
        buckets.into_reindexed()
    }

    pub fn flat_map<I, F>(&self, f: F) -> Collection<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&V) -> I,
    {
        self.values_iter().flat_map(f).collect()
    }

    /// Flatten nested sequences one level. Non-sequence values are dropped.
    pub fn collapse(&self) -> Collection<V::Item>
    where
        V: Sequence,
    {
        self.values_iter()
            .filter_map(|v| v.to_items())
            .flatten()
            .collect()
    }

    /// Pair each value with the value at the same position in `other`.
    /// The result is as long as `self`; missing partners are `None`.
    pub fn zip<W>(&self, other: &Collection<W>) -> Collection<(V, Option<W>)>
    where
        V: Clone,
        W: Clone,
    {
        let mut partners = other.values_iter();
        self.values_iter()
            .map(|v| (v.clone(), partners.next().cloned()))
            .collect()
    }

    /// Values of `self` followed by values of `other`, numbered `0..n`.
    pub fn concat(&self, other: &Collection<V>) -> Collection<V>
    where
        V: Clone,
    {
        self.values_iter().chain(other.values_iter()).cloned().collect()
    }

    /// Use this collection's values as keys for `values`, paired by position.
    pub fn combine<W>(&self, values: &Collection<W>) -> Result<Collection<W>>
    where
        V: AsKey,
        W: Clone,
    {
        if self.len() != values.len() {
            #[cfg(feature = "tracing")]
            tracing::trace!(keys = self.len(), values = values.len(), "combine length mismatch");
            return Err(Error::LengthMismatch {
                keys: self.len(),
                values: values.len(),
            });
        }
        let pairs = self
            .entries
            .iter()
            .zip(values.values_iter())
            .map(|((k, v), w)| {
                v.as_key()
                    .map(|key| (key, w.clone()))
                    .ok_or_else(|| Error::InvalidKey(k.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Collection::from_pairs(pairs))
    }

    pub fn keys(&self) -> Collection<Key> {
        self.keys_iter().cloned().collect()
    }

    /// Values numbered `0..n`.
    pub fn values(&self) -> Collection<V>
    where
        V: Clone,
    {
        self.values_iter().cloned().collect()
    }
}
