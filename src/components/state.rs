use std::fmt::{self, Display};
use std::str::FromStr;

use indexmap::IndexMap;
use url::form_urlencoded;

/// Key-value navigation state owned by the embedding layer (e.g. a URL query).
///
/// Components only read it and propose replacement values.
pub trait QueryState {
    fn get(&self, key: &str) -> Option<&str>;

    /// Replace the value stored under `key`.
    fn propose(&mut self, key: &str, value: String);
}

/// Query parameters in insertion order, one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: IndexMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form-urlencoded query, with or without the leading `?`.
    /// A repeated key keeps its first value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        Self { params }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl QueryState for SearchParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    fn propose(&mut self, key: &str, value: String) {
        self.params.insert(key.to_owned(), value);
    }
}

impl FromStr for SearchParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        f.write_str(&encoded)
    }
}
