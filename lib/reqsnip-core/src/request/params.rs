use std::fmt;

use crate::SnippetError;

/// An ordered, multi-valued list of key/value pairs.
///
/// Used for query strings, cookies and form-encoded bodies. The same key can
/// appear several times, pairs keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair, keeping existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Joins pairs as `key=value&...` without encoding, as shown in a URL.
    pub fn to_raw_string(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Encodes pairs as `application/x-www-form-urlencoded` text.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::FormEncodingError`] if the pairs cannot be encoded.
    pub fn to_urlencoded(&self) -> Result<String, SnippetError> {
        let encoded = serde_urlencoded::to_string(&self.pairs)?;
        Ok(encoded)
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.to_urlencoded().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let pairs = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { pairs }
    }
}
