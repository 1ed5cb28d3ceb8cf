//! Thread-local search store context
//!
//! Code that renders or reacts to the current location can read the store
//! without it being threaded through every call. The owner of a
//! [`SearchBinding`](crate::SearchBinding) installs its store for the
//! duration of a unit of work:
//!
//! ```
//! use urlsearch::{scope, Location, SearchBinding};
//!
//! let binding = SearchBinding::with_location(&Location::new("/").with_search("?q=rust"));
//!
//! let query = {
//!     let _guard = binding.enter_scope();
//!     scope::with_current(|store| store.get("q").map(String::from))
//! };
//! assert_eq!(query, Some(Some("rust".to_string())));
//!
//! // Guard dropped, nothing is provided anymore
//! assert!(!scope::is_provided());
//! ```

use crate::search_store::SearchStore;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Store visible to code running on this thread
    static CURRENT: RefCell<Option<Rc<SearchStore>>> = const { RefCell::new(None) };
}

/// Install `store` for the current thread until the guard is dropped.
pub fn enter(store: Rc<SearchStore>) -> ScopeGuard {
    let previous = CURRENT.with(|current| current.borrow_mut().replace(store));
    ScopeGuard { previous }
}

/// Run `f` with `store` installed.
pub fn provide<F, R>(store: Rc<SearchStore>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = enter(store);
    f()
}

/// Store installed by the innermost active scope
pub fn current() -> Option<Rc<SearchStore>> {
    CURRENT.with(|current| current.borrow().clone())
}

/// Execute a closure with access to the current store.
///
/// Returns `None` if no scope is active.
pub fn with_current<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&SearchStore) -> R,
{
    // Clone the handle so `f` may open nested scopes
    current().map(|store| f(&store))
}

/// Check if a store is installed for the current thread
pub fn is_provided() -> bool {
    CURRENT.with(|current| current.borrow().is_some())
}

/// RAII guard for an installed store - restores the outer one when dropped
#[must_use = "the store is uninstalled as soon as the guard is dropped"]
pub struct ScopeGuard {
    previous: Option<Rc<SearchStore>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|current| {
            *current.borrow_mut() = previous;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pathname: &str) -> Rc<SearchStore> {
        Rc::new(SearchStore::new(pathname))
    }

    #[test]
    fn test_nothing_provided() {
        assert!(!is_provided());
        assert!(current().is_none());
        assert_eq!(with_current(|s| s.len()), None);
    }

    #[test]
    fn test_provide() {
        let pathname = provide(store("/a"), || {
            with_current(|s| s.pathname().to_string())
        });
        assert_eq!(pathname.as_deref(), Some("/a"));
        assert!(!is_provided());
    }

    #[test]
    fn test_nested_scopes_restore_outer() {
        let outer = enter(store("/outer"));
        {
            let _inner = enter(store("/inner"));
            assert_eq!(current().map(|s| s.pathname().to_string()), Some("/inner".into()));
        }
        assert_eq!(current().map(|s| s.pathname().to_string()), Some("/outer".into()));
        drop(outer);
        assert!(!is_provided());
    }

    #[test]
    fn test_nested_scope_inside_with_current() {
        provide(store("/outer"), || {
            let inner = with_current(|_| provide(store("/inner"), current));
            assert_eq!(
                inner.flatten().map(|s| s.pathname().to_string()),
                Some("/inner".into())
            );
        });
    }
}
