//! Restartable lazy sequences.
//!
//! A `LazySequence` stores how to *start* producing values, never a position.
//! Every materializing call (`take`, `take_while`, `eager`, ...) starts a fresh
//! run from the producer's initial state and pulls only as many values as it
//! needs, so infinite producers are fine as long as the caller bounds the pull.
//!
//! Adapters (`map`, `filter`, `skip`, `chunk`) wrap the start function and
//! compute nothing until a run is driven.

use std::fmt;
use std::rc::Rc;

use collectrs_core::config;
use collectrs_core::prelude::*;
use collectrs_ops::Collection;

/// One step of a hand-written producer.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<V> {
    Yield(V),
    Done,
}

type Start<V> = Rc<dyn Fn() -> Box<dyn Iterator<Item = V>>>;

pub struct LazySequence<V> {
    start: Start<V>,
    materialize_limit: usize,
}

impl<V> Clone for LazySequence<V> {
    fn clone(&self) -> Self {
        Self {
            start: Rc::clone(&self.start),
            materialize_limit: self.materialize_limit,
        }
    }
}

impl<V> fmt::Debug for LazySequence<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequence")
            .field("materialize_limit", &self.materialize_limit)
            .finish_non_exhaustive()
    }
}

/// Drives a `Step` function over its own copy of the state.
struct Producer<S, F> {
    state: S,
    step: Rc<F>,
    done: bool,
}

impl<S, V, F> Iterator for Producer<S, F>
where
    F: Fn(&mut S) -> Step<V>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.done {
            return None;
        }
        match (self.step)(&mut self.state) {
            Step::Yield(v) => Some(v),
            Step::Done => {
                self.done = true;
                None
            }
        }
    }
}

impl<V: 'static> LazySequence<V> {
    /// `factory` is called once per run and must return a fresh iterator.
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self {
            start: Rc::new(move || Box::new(factory().into_iter()) as Box<dyn Iterator<Item = V>>),
            materialize_limit: config::global().materialize_limit,
        }
    }

    /// Explicit state machine: each run clones `initial` and calls `step`
    /// until it returns `Step::Done`.
    pub fn generate<S, F>(initial: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(&mut S) -> Step<V> + 'static,
    {
        let step = Rc::new(step);
        Self::new(move || Producer {
            state: initial.clone(),
            step: Rc::clone(&step),
            done: false,
        })
    }

    /// A finite sequence over `values`.
    pub fn from_values(values: Vec<V>) -> Self
    where
        V: Clone,
    {
        Self::new(move || values.clone())
    }

    pub fn with_materialize_limit(mut self, limit: usize) -> Self {
        self.materialize_limit = limit;
        self
    }

    pub fn materialize_limit(&self) -> usize {
        self.materialize_limit
    }

    /// Start a fresh run.
    pub fn iter(&self) -> Box<dyn Iterator<Item = V>> {
        #[cfg(feature = "tracing")]
        tracing::trace!("starting lazy producer run");
        (*self.start)()
    }

    /// First `n` values of a fresh run (fewer if the producer finishes).
    pub fn take(&self, n: usize) -> Collection<V> {
        let out: Collection<V> = self.iter().take(n).collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(requested = n, produced = out.len(), "lazy take");
        out
    }

    pub fn take_while<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter().take_while(|v| pred(v)).collect()
    }

    /// Values before the first one satisfying `pred`.
    pub fn take_until<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V) -> bool,
    {
        self.take_while(|v| !pred(v))
    }

    pub fn first(&self) -> Option<V> {
        self.iter().next()
    }

    /// Materialize the whole run. Fails with `MaterializeLimit` instead of
    /// looping forever when the producer outruns the configured cap.
    pub fn eager(&self) -> Result<Collection<V>> {
        let limit = self.materialize_limit;
        let values: Vec<V> = self.iter().take(limit.saturating_add(1)).collect();
        if values.len() > limit {
            #[cfg(feature = "tracing")]
            tracing::trace!(limit, "lazy sequence exceeded materialize limit");
            return Err(Error::MaterializeLimit(limit));
        }
        Ok(values.into_iter().collect())
    }

    fn adapt<R, F, I>(&self, wrap: F) -> LazySequence<R>
    where
        R: 'static,
        F: Fn(Box<dyn Iterator<Item = V>>) -> I + 'static,
        I: Iterator<Item = R> + 'static,
    {
        let start = Rc::clone(&self.start);
        LazySequence::new(move || wrap((*start)())).with_materialize_limit(self.materialize_limit)
    }

    pub fn map<R, F>(&self, f: F) -> LazySequence<R>
    where
        R: 'static,
        F: Fn(V) -> R + 'static,
    {
        let f = Rc::new(f);
        self.adapt(move |run| {
            let f = Rc::clone(&f);
            run.map(move |v| f(v))
        })
    }

    pub fn filter<F>(&self, pred: F) -> LazySequence<V>
    where
        F: Fn(&V) -> bool + 'static,
    {
        let pred = Rc::new(pred);
        self.adapt(move |run| {
            let pred = Rc::clone(&pred);
            run.filter(move |v| pred(v))
        })
    }

    pub fn skip(&self, n: usize) -> LazySequence<V> {
        self.adapt(move |run| run.skip(n))
    }

    pub fn skip_while<F>(&self, pred: F) -> LazySequence<V>
    where
        F: Fn(&V) -> bool + 'static,
    {
        let pred = Rc::new(pred);
        self.adapt(move |run| {
            let pred = Rc::clone(&pred);
            run.skip_while(move |v| pred(v))
        })
    }

    /// Group each run into consecutive collections of at most `size` values.
    pub fn chunk(&self, size: usize) -> LazySequence<Collection<V>> {
        self.adapt(move |mut run| {
            std::iter::from_fn(move || {
                let chunk: Collection<V> = run.by_ref().take(size).collect();
                if chunk.is_empty() {
                    None
                } else {
                    Some(chunk)
                }
            })
        })
    }
}

impl LazySequence<i64> {
    /// The count `start, start + 1, ...`, ending after `i64::MAX`.
    pub fn range(start: i64) -> Self {
        Self::generate(Some(start), |next| match *next {
            Some(v) => {
                *next = v.checked_add(1);
                Step::Yield(v)
            }
            None => Step::Done,
        })
    }
}
