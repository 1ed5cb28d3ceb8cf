use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::helpers::{prune_fragment, split_search};
use crate::search_store::SearchStore;

/// A navigation target as supplied by a router: a path, an optional raw
/// query string and an optional history-entry key.
///
/// Two locations with the same path and query but different keys are
/// distinct navigations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub pathname: String,
    /// Raw query, leading `?` included or absent
    pub search: Option<String>,
    pub key: Option<String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: None,
            key: None,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Split a relative href (`/path?query#fragment`) into a location.
    ///
    /// The fragment is dropped. An empty path becomes `/`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidPathname` if the path part is not empty
    /// and does not start with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlsearch::Location;
    ///
    /// let location = Location::parse("/users?page=2#top").unwrap();
    /// assert_eq!(location.pathname, "/users");
    /// assert_eq!(location.search.as_deref(), Some("?page=2"));
    /// assert!(Location::parse("users").is_err());
    /// ```
    pub fn parse(href: &str) -> Result<Self> {
        let (href, _fragment) = prune_fragment(href);
        let (pathname, search) = split_search(href);

        let pathname = match pathname {
            "" => "/",
            p if p.starts_with('/') => p,
            _ => return Err(ParseError::InvalidPathname),
        };

        Ok(Self {
            pathname: pathname.into(),
            search: search.map(Into::into),
            key: None,
        })
    }

    /// Raw query string, empty if absent
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    /// `pathname` followed by the raw query, normalized to start with `?`
    pub fn href(&self) -> String {
        let mut href = self.pathname.clone();
        let search = self.search();
        if !search.is_empty() {
            if !search.starts_with('?') {
                href.push('?');
            }
            href.push_str(search);
        }
        href
    }

    /// Decode this location's query into a fresh store.
    pub fn search_store(&self) -> SearchStore {
        SearchStore::from_location(self)
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}
