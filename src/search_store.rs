use crate::codec::{parse_query, serialize_pairs_into, try_parse_query};
use crate::compat::{BTreeMap, String, Vec};
use crate::error::Result;
use crate::location::Location;

/// Decoded view of a location's query string.
///
/// Parameters are kept as an ordered list of `(key, value)` pairs, so a key
/// may carry several values in the order they were added. Mutators return
/// `&mut Self` to allow chaining:
///
/// ```
/// use urlsearch::SearchStore;
///
/// let mut store = SearchStore::new("/posts");
/// store.append("tag", ["rust"]).append("tag", ["web"]).set("page", ["2"]);
///
/// assert_eq!(store.search(), "?tag=rust&tag=web&page=2");
/// assert_eq!(store.path(), "/posts?tag=rust&tag=web&page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStore {
    pathname: String,
    params: Vec<(String, String)>,
}

impl SearchStore {
    /// Create an empty store for `pathname`
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            params: Vec::new(),
        }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Decoding is lenient: malformed escapes are kept literally.
    pub fn parse(pathname: impl Into<String>, query: &str) -> Self {
        Self {
            pathname: pathname.into(),
            params: parse_query(query),
        }
    }

    /// Parse from a query string, rejecting malformed percent-escapes and
    /// components that do not decode to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidPercentEncoding` or `ParseError::InvalidUtf8`.
    pub fn try_parse(pathname: impl Into<String>, query: &str) -> Result<Self> {
        Ok(Self {
            pathname: pathname.into(),
            params: try_parse_query(query)?,
        })
    }

    pub fn from_location(location: &Location) -> Self {
        Self::parse(
            location.pathname.as_str(),
            location.search.as_deref().unwrap_or_default(),
        )
    }

    /// Add each value under `key`, after any existing ones.
    pub fn append<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        self.params.extend(
            values
                .into_iter()
                .map(|value| (String::from(key), String::from(value.as_ref()))),
        );
        self
    }

    /// Replace all values under `key`. An empty list clears the key.
    ///
    /// The key is removed and re-appended, so it moves to the end of the
    /// serialized query.
    pub fn set<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        self.delete(key).append(key, values)
    }

    /// Remove every value under `key`.
    pub fn delete(&mut self, key: &str) -> &mut Self {
        self.params.retain(|(k, _)| k != key);
        self
    }

    /// Remove only the given values under `key`.
    ///
    /// Remaining values keep their order and position. An empty list
    /// removes nothing; use [`SearchStore::delete`] to drop the whole key.
    pub fn delete_values<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return self;
        }

        self.params
            .retain(|(k, v)| k != key || !values.iter().any(|value| value.as_ref() == v));
        self
    }

    /// Remove each key entirely.
    pub fn delete_keys<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.delete(key.as_ref());
        }
        self
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Check if at least one of `values` is present under `key`.
    /// An empty list never matches.
    pub fn has_any<I, V>(&self, key: &str, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let present = self.get_all(key);
        values
            .into_iter()
            .any(|value| present.contains(&value.as_ref()))
    }

    /// Check if every one of `values` is present under `key`.
    /// An empty list always matches.
    pub fn has_all<I, V>(&self, key: &str, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let present = self.get_all(key);
        values
            .into_iter()
            .all(|value| present.contains(&value.as_ref()))
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Distinct keys, in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (key, _) in &self.params {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }

    /// All values across all keys, in pair order.
    pub fn values(&self) -> Vec<&str> {
        self.params.iter().map(|(_, v)| v.as_str()).collect()
    }

    /// Iterate over decoded `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of `(key, value)` pairs.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Snapshot of every key with its full value list.
    pub fn json(&self) -> BTreeMap<String, Vec<String>> {
        let mut json: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in &self.params {
            json.entry(key.clone()).or_default().push(value.clone());
        }
        json
    }

    /// Serialized query with leading `?`, or empty string if no parameters.
    pub fn search(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        serialize_pairs_into(&mut result, self.iter());
        result
    }

    /// `pathname` followed by `search`.
    pub fn path(&self) -> String {
        let mut path = self.pathname.clone();
        path.push_str(&self.search());
        path
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Empty store bound to the same pathname.
    pub fn create(&self) -> Self {
        Self::new(self.pathname.clone())
    }

    /// Location describing the current state, for handing back to a router.
    pub fn to_location(&self) -> Location {
        let search = self.search();
        let location = Location::new(self.pathname.clone());
        if search.is_empty() {
            location
        } else {
            location.with_search(search)
        }
    }
}

impl core::fmt::Display for SearchStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.search())
    }
}

impl From<&Location> for SearchStore {
    fn from(location: &Location) -> Self {
        Self::from_location(location)
    }
}
