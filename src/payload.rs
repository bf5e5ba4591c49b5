//! Query payload construction.
//!
//! A [`Payload`] is the flat set of query parameters for one request. It is built
//! fresh for every call and only ever holds keys that carry a value.

use serde_json::{Map, Value};
use std::fmt;

/// Separator used for multi-valued fields (`sources`, `domains`, `q`, ...).
pub const LIST_SEPARATOR: &str = ",";

/// Ordered query parameters for a single request.
///
/// Keys with no value are never stored, so nothing like `country=` or
/// `country=None` ever reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    params: Vec<(&'static str, String)>,
}

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a scalar value, replacing any previous value for `key`.
    ///
    /// Empty strings are treated as "not supplied" and remove the key instead.
    pub fn insert(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        self.params.retain(|(k, _)| *k != key);
        if !value.is_empty() {
            self.params.push((key, value));
        }
    }

    /// Inserts `value` when present; does nothing for `None`.
    pub fn insert_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Inserts a multi-valued field as a comma-joined string.
    ///
    /// Empty entries are skipped, and an empty collection yields no key at all.
    pub fn insert_joined<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        self.insert(key, joined);
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(k, _)| *k)
    }

    /// Key/value pairs in insertion order, ready for `reqwest::RequestBuilder::query`.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// The payload as a JSON object, for logging.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v:?}")?;
        }
        f.write_str("}")
    }
}
