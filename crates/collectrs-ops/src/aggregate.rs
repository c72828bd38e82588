//! Folds and numeric aggregates.
//!
//! Aggregates over an empty collection return `None` rather than failing.

use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::iter::Sum;

use collectrs_core::prelude::*;

use crate::collection::Collection;

impl<V> Collection<V> {
    /// Sum of the values. For `Value`, non-numeric entries are skipped.
    pub fn sum(&self) -> V
    where
        V: for<'a> Sum<&'a V>,
    {
        self.values_iter().sum()
    }

    /// Largest value; the first one wins among equals.
    pub fn max(&self) -> Option<&V>
    where
        V: PartialOrd,
    {
        self.values_iter()
            .fold(None, |best, v| match best {
                Some(b) if !matches!(v.partial_cmp(b), Some(Ordering::Greater)) => Some(b),
                _ => Some(v),
            })
    }

    /// Smallest value; the first one wins among equals.
    pub fn min(&self) -> Option<&V>
    where
        V: PartialOrd,
    {
        self.values_iter()
            .fold(None, |best, v| match best {
                Some(b) if !matches!(v.partial_cmp(b), Some(Ordering::Less)) => Some(b),
                _ => Some(v),
            })
    }

    /// Mean of the numeric values; non-numeric values are skipped.
    pub fn average(&self) -> Option<f64>
    where
        V: Numeric,
    {
        let readings: Vec<f64> = self.values_iter().filter_map(Numeric::to_f64).collect();
        if readings.is_empty() {
            return None;
        }
        Some(readings.iter().sum::<f64>() / readings.len() as f64)
    }

    pub fn median(&self) -> Option<f64>
    where
        V: Numeric,
    {
        let mut readings: Vec<f64> = self.values_iter().filter_map(Numeric::to_f64).collect();
        if readings.is_empty() {
            return None;
        }
        readings.sort_by(f64::total_cmp);
        let mid = readings.len() / 2;
        if readings.len() % 2 == 0 {
            Some((readings[mid - 1] + readings[mid]) / 2.0)
        } else {
            Some(readings[mid])
        }
    }

    /// Left fold in iteration order.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.values_iter().fold(initial, f)
    }

    /// Join with `glue`, using `final_glue` between the last two values.
    pub fn join(&self, glue: &str, final_glue: &str) -> String
    where
        V: Display,
    {
        let mut out = String::new();
        let last = self.len().saturating_sub(1);
        for (pos, v) in self.values_iter().enumerate() {
            if pos > 0 {
                out.push_str(if pos == last { final_glue } else { glue });
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{v}");
        }
        out
    }

    pub fn implode(&self, glue: &str) -> String
    where
        V: Display,
    {
        self.join(glue, glue)
    }
}
