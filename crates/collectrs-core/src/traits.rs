//! Capability traits that collection operations bound on.
//!
//! Operations that need something from a value beyond `Clone`/`PartialEq`
//! (a numeric reading, a named field, a positional sequence) ask for it through
//! one of these traits instead of inspecting the value at runtime.

use crate::value::Value;

/// Values with a numeric reading, used by `sum`-like aggregates.
///
/// Non-numeric values return `None` and are skipped by `average`/`median`.
pub trait Numeric {
    fn to_f64(&self) -> Option<f64>;
}

macro_rules! numeric_prim {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_prim!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

/// Record-like values exposing named fields (`group_by_field`).
pub trait Fields {
    fn field(&self, name: &str) -> Option<&Value>;
}

/// Values that can be viewed as a positional run of items.
///
/// `collapse` flattens them one level, `try_map_spread` destructures them into
/// a fixed number of arguments. Scalars return `None`.
pub trait Sequence {
    type Item;

    fn to_items(&self) -> Option<Vec<Self::Item>>;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn to_items(&self) -> Option<Vec<T>> {
        Some(self.clone())
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn to_items(&self) -> Option<Vec<T>> {
        Some(self.to_vec())
    }
}
