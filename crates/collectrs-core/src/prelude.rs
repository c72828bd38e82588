//! Convenient re-exports for downstream crates.

pub use crate::config::CollectConfig;
pub use crate::error::{Error, Result};
pub use crate::key::{AsKey, Key};
pub use crate::traits::{Fields, Numeric, Sequence};
pub use crate::value::Value;
