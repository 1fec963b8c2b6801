//! Collection primitives.
//!
//! - `Dict` / `SharedDict` - insertion-ordered dictionary with a modification version
//! - `MapStore` - the store contract views are written against
//! - `ValueView` / `LiveValueView` - read-only projections of a store's values
//! - `Collection` - the shared collection surface, read-only or not
//! - `errors` - constructors and checks for every `CollectionError`

pub mod collection;
pub mod dict;
pub mod error;
pub mod errors;
pub mod shape;
pub mod store;
pub mod view;

pub use collection::Collection;
pub use dict::{Dict, SharedDict, fast_hasher};
pub use error::{CollectionError, CollectionResult, ErrorKind};
pub use shape::{ArrayShape, Shaped};
pub use store::MapStore;
pub use view::{LiveValueView, LiveValues, ValueView, Values};
