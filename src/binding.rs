//! Location-change adapter.
//!
//! A [`SearchBinding`] owns the store for the location a router last
//! reported. Each new location replaces the store wholesale; nothing is
//! carried over from the previous one.
//!
//! ```
//! use urlsearch::{Location, SearchBinding};
//!
//! let mut binding = SearchBinding::new();
//! assert!(binding.current().is_none());
//!
//! let store = binding.bind(&Location::new("/items").with_search("?page=1"));
//! assert_eq!(store.get("page"), Some("1"));
//!
//! // Same location again: the store is kept
//! assert!(!binding.observe(&Location::new("/items").with_search("?page=1")));
//! assert_eq!(binding.generation(), 1);
//! ```

use crate::compat::Rc;
use crate::location::Location;
use crate::search_store::SearchStore;

/// Receiver of location-change notifications from a navigation subsystem.
pub trait LocationListener {
    fn on_location_change(&mut self, location: &Location);
}

#[derive(Debug, Clone)]
struct Bound {
    location: Location,
    store: Rc<SearchStore>,
}

/// Current search store, rebuilt whenever the observed location changes.
#[derive(Debug, Clone, Default)]
pub struct SearchBinding {
    bound: Option<Bound>,
    generation: u64,
}

impl SearchBinding {
    /// Create an uninitialized binding. `current()` is `None` until the
    /// first location is observed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding already holding the store for `location`.
    pub fn with_location(location: &Location) -> Self {
        let mut binding = Self::new();
        binding.observe(location);
        binding
    }

    /// Rebuild the store if `location` differs from the last observed one.
    /// Returns true if a new store was installed.
    pub fn observe(&mut self, location: &Location) -> bool {
        if self
            .bound
            .as_ref()
            .is_some_and(|bound| bound.location == *location)
        {
            #[cfg(feature = "logging")]
            tracing::trace!(
                target: "urlsearch::binding",
                pathname = location.pathname.as_str(),
                "location unchanged, keeping store"
            );
            return false;
        }

        let store = Rc::new(SearchStore::from_location(location));
        self.generation += 1;

        #[cfg(feature = "logging")]
        tracing::debug!(
            target: "urlsearch::binding",
            pathname = location.pathname.as_str(),
            search = location.search(),
            params = store.len(),
            generation = self.generation,
            "search store rebuilt"
        );

        self.bound = Some(Bound {
            location: location.clone(),
            store,
        });
        true
    }

    /// Observe `location` and return the store bound to it.
    pub fn bind(&mut self, location: &Location) -> Rc<SearchStore> {
        self.observe(location);
        match &self.bound {
            Some(bound) => Rc::clone(&bound.store),
            None => Rc::new(SearchStore::from_location(location)),
        }
    }

    /// Store for the last observed location, if any
    pub fn current(&self) -> Option<Rc<SearchStore>> {
        self.bound.as_ref().map(|bound| Rc::clone(&bound.store))
    }

    pub fn location(&self) -> Option<&Location> {
        self.bound.as_ref().map(|bound| &bound.location)
    }

    pub fn is_initialized(&self) -> bool {
        self.bound.is_some()
    }

    /// Number of stores built so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Make the current store visible through [`crate::scope`] until the
    /// returned guard is dropped. `None` if nothing was observed yet.
    #[cfg(feature = "std")]
    pub fn enter_scope(&self) -> Option<crate::scope::ScopeGuard> {
        self.current().map(crate::scope::enter)
    }
}

impl LocationListener for SearchBinding {
    fn on_location_change(&mut self, location: &Location) {
        self.observe(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_uninitialized() {
        let binding = SearchBinding::new();
        assert!(!binding.is_initialized());
        assert!(binding.current().is_none());
        assert!(binding.location().is_none());
        assert_eq!(binding.generation(), 0);
    }

    #[test]
    fn test_with_location_is_eager() {
        let binding = SearchBinding::with_location(&Location::new("/a").with_search("x=1"));
        assert!(binding.is_initialized());
        assert_eq!(binding.generation(), 1);
        assert_eq!(
            binding.current().map(|store| store.search()),
            Some("?x=1".into())
        );
    }

    #[test]
    fn test_observe_replaces_on_change() {
        let mut binding = SearchBinding::new();
        assert!(binding.observe(&Location::new("/a")));
        let first = binding.current();

        assert!(binding.observe(&Location::new("/a").with_search("?x=1")));
        let second = binding.current();

        assert_eq!(binding.generation(), 2);
        assert_eq!(first.map(|store| store.len()), Some(0));
        assert_eq!(second.map(|store| store.len()), Some(1));
    }

    #[test]
    fn test_observe_same_location_keeps_store() {
        let location = Location::new("/a").with_search("?x=1");
        let mut binding = SearchBinding::with_location(&location);
        let before = binding.current();

        assert!(!binding.observe(&location.clone()));
        let after = binding.current();

        assert!(matches!((before, after), (Some(b), Some(a)) if Rc::ptr_eq(&b, &a)));
    }

    #[test]
    fn test_new_key_rebuilds() {
        let mut binding = SearchBinding::new();
        binding.observe(&Location::new("/a").with_key("one"));
        assert!(binding.observe(&Location::new("/a").with_key("two")));
        assert_eq!(binding.generation(), 2);
    }

    #[test]
    fn test_listener() {
        let mut binding = SearchBinding::new();
        let listener: &mut dyn LocationListener = &mut binding;
        listener.on_location_change(&Location::new("/b").with_search("q=rust"));
        assert_eq!(
            binding.location().map(|l| l.pathname.as_str()),
            Some("/b")
        );
    }
}
