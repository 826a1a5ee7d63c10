//! Query options.
//!
//! Open set of URL query parameters passed through verbatim to the Admin API.

use std::collections::BTreeMap;

/// Query parameters for read operations.
///
/// Keys are kept in order so the resulting query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the `limit` parameter.
    #[must_use]
    pub fn with_limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Sets the `since_id` parameter.
    #[must_use]
    pub fn with_since_id(self, since_id: u64) -> Self {
        self.with("since_id", since_id)
    }

    /// Restricts the response to the given fields.
    #[must_use]
    pub fn with_fields(self, fields: &[&str]) -> Self {
        self.with("fields", fields.join(","))
    }

    /// Inserts a parameter, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.params.insert(key.into(), value.to_string())
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}
