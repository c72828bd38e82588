//! Uniform random selection.
//!
//! The process-wide source is a thread-local `StdRng` seeded from
//! `CollectConfig::seed` when set. Each thread seeds on its first draw, so a
//! config installed afterwards only affects threads that have not drawn yet.
//! Callers wanting reproducible draws without touching global config pass
//! their own rng to the `_with` variants.

use std::cell::RefCell;

use collectrs_core::config;
use collectrs_core::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::collection::Collection;

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(seeded_rng());
}

fn seeded_rng() -> StdRng {
    let seed = config::global().seed.unwrap_or_else(rand::random);
    #[cfg(feature = "tracing")]
    tracing::trace!(seed, "seeding collection random source");
    StdRng::seed_from_u64(seed)
}

impl<V> Collection<V> {
    /// One uniformly chosen value, `None` when empty.
    pub fn random(&self) -> Option<&V> {
        RNG.with(|rng| self.random_with(&mut rng.borrow_mut()))
    }

    pub fn random_with(&self, rng: &mut StdRng) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        let pos = index::sample(rng, self.len(), 1).index(0);
        Some(&self.entries[pos].1)
    }

    /// `n` values from distinct positions, numbered `0..n`.
    pub fn random_n(&self, n: usize) -> Result<Self>
    where
        V: Clone,
    {
        RNG.with(|rng| self.random_n_with(n, &mut rng.borrow_mut()))
    }

    pub fn random_n_with(&self, n: usize, rng: &mut StdRng) -> Result<Self>
    where
        V: Clone,
    {
        if n > self.len() {
            return Err(Error::NotEnoughItems {
                requested: n,
                available: self.len(),
            });
        }
        Ok(index::sample(rng, self.len(), n)
            .into_iter()
            .map(|pos| self.entries[pos].1.clone())
            .collect())
    }
}
