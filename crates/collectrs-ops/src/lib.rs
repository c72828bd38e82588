#![forbid(unsafe_code)]
//! collectrs-ops: the eager, ordered, keyed `Collection`.
//!
//! Design intent:
//! - Pure and synchronous; no shared state beyond the thread-local random source.
//! - Every operation returns a new collection unless it is documented as
//!   in-place (`push`, `prepend`, `pop`, `put`, `forget`, `transform`).
//! - Whether an operation renumbers keys `0..n` or keeps the originals is fixed
//!   per operation, never guessed from the result.

pub mod collection;

mod aggregate;
mod crud;
mod group;
mod order;
mod sample;
mod select;
mod transform;

pub use collection::{collect, Collection};
pub use transform::Spread;
