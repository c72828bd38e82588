#![forbid(unsafe_code)]
//! collectrs: eager keyed collections and restartable lazy sequences.
//!
//! ```
//! use collectrs::{collect, LazySequence};
//!
//! let phones = collect(["apple", "samsung", "xiaomi", "advan", "vivo"]);
//! assert_eq!(phones.join("-", "_"), "apple-samsung-xiaomi-advan_vivo");
//!
//! let counting = LazySequence::range(1);
//! assert_eq!(counting.take(3).to_vec(), vec![1, 2, 3]);
//! ```

pub use collectrs_core::{config, record, AsKey, CollectConfig, Error, Fields, Key, Numeric, Result, Sequence, Value};
pub use collectrs_lazy::{LazySequence, Step};
pub use collectrs_ops::{collect, Collection, Spread};
