//! Named-parameter maps
//!
//! The external request layer hands each calculator a flat map of
//! string-valued parameters (form-style input). This module provides the
//! map type and typed extraction with per-calculator defaults: a missing
//! key falls back to the default, an unparseable value fails fast.

use std::collections::BTreeMap;

use crate::error::CalcError;

/// Calculator output: metric name to value, in deterministic key order.
///
/// Values may be `f64::NEG_INFINITY` where a sentinel is defined (e.g.
/// a link margin with no positive denominator).
pub type ResultMap = BTreeMap<String, f64>;

/// Flat named-parameter input to a calculator.
#[derive(Debug, Clone, Default)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter map (every key at its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw string value, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Parse a parameter as `f64`, falling back to `default` when absent.
    pub fn get_f64(&self, key: &'static str, default: f64) -> Result<f64, CalcError> {
        match self.0.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| CalcError::Parse {
                key,
                value: raw.clone(),
            }),
        }
    }

    /// Parse a parameter as `u32`, falling back to `default` when absent.
    ///
    /// Integer-count parameters (resource blocks, timeslots, subscribers)
    /// reject fractional text rather than truncating it.
    pub fn get_u32(&self, key: &'static str, default: u32) -> Result<u32, CalcError> {
        match self.0.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| CalcError::Parse {
                key,
                value: raw.clone(),
            }),
        }
    }

    /// String value with a default for absent keys.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(default)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Params {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}
