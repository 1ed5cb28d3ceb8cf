#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod codec;
mod error;
mod helpers;

mod binding;
mod location;
#[cfg(feature = "std")]
pub mod scope;
mod search_store;

// Public API
pub use binding::{LocationListener, SearchBinding};
pub use error::ParseError;
pub use location::Location;
pub use search_store::SearchStore;

pub type Result<T> = core::result::Result<T, ParseError>;
