//! Named scalar parameter bags.
//!
//! A model definition initialises each component from an open set of named
//! scalar values. Components do not apply these blindly onto their fields;
//! each component kind reads the bag through a [`ParamReader`] into its own
//! typed configuration struct. Keys the reader never consumed are reported
//! back as unknown-key warnings, and a missing required key is a hard error.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// An ordered key -> value bag of component parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(pub BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Missing required parameter '{key}'")]
    Missing { key: String },

    #[error("Parameter '{key}' has the wrong type (expected {expected})")]
    WrongType { key: String, expected: &'static str },
}

/// Reads typed values out of a [`Params`] bag while tracking consumed keys.
///
/// Call the accessors for every key a component understands, then ask for
/// [`ParamReader::unknown_keys`] to report the leftovers.
pub struct ParamReader<'a> {
    params: &'a Params,
    consumed: BTreeSet<&'a str>,
}

impl<'a> ParamReader<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self {
            params,
            consumed: BTreeSet::new(),
        }
    }

    fn take(&mut self, key: &str) -> Option<&'a ParamValue> {
        match self.params.0.get_key_value(key) {
            Some((k, v)) => {
                self.consumed.insert(k.as_str());
                Some(v)
            }
            None => None,
        }
    }

    /// A required numeric parameter.
    pub fn require_f64(&mut self, key: &str) -> Result<f64, ParamError> {
        match self.take(key) {
            Some(v) => v.as_f64().ok_or(ParamError::WrongType {
                key: key.to_string(),
                expected: "number",
            }),
            None => Err(ParamError::Missing {
                key: key.to_string(),
            }),
        }
    }

    /// An optional numeric parameter with a default.
    pub fn f64_or(&mut self, key: &str, default: f64) -> Result<f64, ParamError> {
        match self.take(key) {
            Some(v) => v.as_f64().ok_or(ParamError::WrongType {
                key: key.to_string(),
                expected: "number",
            }),
            None => Ok(default),
        }
    }

    /// An optional boolean parameter with a default.
    pub fn bool_or(&mut self, key: &str, default: bool) -> Result<bool, ParamError> {
        match self.take(key) {
            Some(v) => v.as_bool().ok_or(ParamError::WrongType {
                key: key.to_string(),
                expected: "boolean",
            }),
            None => Ok(default),
        }
    }

    /// An optional text parameter with a default.
    pub fn text_or(&mut self, key: &str, default: &str) -> Result<String, ParamError> {
        match self.take(key) {
            Some(v) => v
                .as_text()
                .map(str::to_string)
                .ok_or(ParamError::WrongType {
                    key: key.to_string(),
                    expected: "text",
                }),
            None => Ok(default.to_string()),
        }
    }

    /// Keys present in the bag that no accessor consumed, in sorted order.
    pub fn unknown_keys(&self) -> Vec<String> {
        self.params
            .keys()
            .filter(|k| !self.consumed.contains(k))
            .map(str::to_string)
            .collect()
    }
}
