#![forbid(unsafe_code)]
//! collectrs-lazy: on-demand, potentially infinite sequences that materialize
//! a bounded prefix into a `collectrs_ops::Collection`.
//!
//! Single-threaded by construction (`Rc`); suspension happens only between
//! yields of the producer, driven by the caller.

pub mod sequence;

pub use sequence::{LazySequence, Step};
