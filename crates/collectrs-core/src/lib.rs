#![forbid(unsafe_code)]
//! collectrs-core: keys, dynamic values, capability traits, errors and
//! configuration shared by the eager and lazy collection crates.
//!
//! Pure data; no I/O and no collection logic lives here.

pub mod config;
pub mod error;
pub mod key;
pub mod prelude;
pub mod traits;
pub mod value;

pub use config::CollectConfig;
pub use error::{Error, Result};
pub use key::{AsKey, Key};
pub use traits::{Fields, Numeric, Sequence};
pub use value::Value;
