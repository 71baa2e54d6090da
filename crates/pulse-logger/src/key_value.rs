// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Structured context attached to a single log call.
//!
//! A [`KeyValueMap`] is an insertion-ordered map from string keys to JSON
//! values. Both adapters render it the same way: strings appear verbatim,
//! `null` appears as the literal `"null"`, and every other value appears as
//! compact JSON.

use crate::LoggerError;
use serde_json::{Map, Value};

/// Literal used when a context value is null.
pub const NULL_VALUE: &str = "null";

/// Ordered key/value context for a structured log call.
///
/// # Example
/// ```
/// use pulse_logger::KeyValueMap;
///
/// let mut ctx = KeyValueMap::new();
/// ctx.add("request_id", "abc-123").add("attempt", 2).add("user", None::<String>);
///
/// let rendered: Vec<(&str, String)> = ctx.rendered().collect();
/// assert_eq!(rendered[0], ("request_id", "abc-123".to_string()));
/// assert_eq!(rendered[2], ("user", "null".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct KeyValueMap {
    pairs: Map<String, Value>,
}

impl KeyValueMap {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object map.
    pub fn from_map(pairs: Map<String, Value>) -> Self {
        Self { pairs }
    }

    /// Builds a context from an arbitrary JSON value.
    ///
    /// Fails with [`LoggerError::InvalidArgument`] when the value is `null`
    /// or is not an object.
    pub fn from_value(value: Value) -> Result<Self, LoggerError> {
        match value {
            Value::Object(pairs) => Ok(Self { pairs }),
            Value::Null => Err(LoggerError::InvalidArgument(
                "key-value pairs cannot be null".to_string(),
            )),
            other => Err(LoggerError::InvalidArgument(format!(
                "key-value pairs must be an object, got {other}"
            ))),
        }
    }

    /// Inserts `key`, overwriting any previous value. Overwritten keys keep
    /// their original position.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.pairs.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.get(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the raw entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates the entries rendered to strings, in insertion order.
    pub fn rendered(&self) -> impl Iterator<Item = (&str, String)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), render_value(v)))
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.pairs
    }
}

impl TryFrom<Value> for KeyValueMap {
    type Error = LoggerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for KeyValueMap {
    fn from(pairs: Map<String, Value>) -> Self {
        Self::from_map(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValueMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.add(k, v);
        }
        map
    }
}

/// Renders a single context value the way both adapters emit it.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_VALUE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Appends `key=value` to `out`, space-separated from what is already there.
///
/// Values that are empty or contain whitespace, `=` or `"` are written as a
/// JSON string literal so the pairs stay unambiguous.
pub(crate) fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(key);
    out.push('=');
    if needs_quoting(value) {
        out.push_str(&Value::from(value).to_string());
    } else {
        out.push_str(value);
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '"')
}
