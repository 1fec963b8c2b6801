//! Read-only projections of a store's values.
//!
//! - `ValueView` borrows any [`MapStore`](crate::store::MapStore). The borrow
//!   rules out mutation while the view (or one of its iterators) is alive.
//! - `LiveValueView` watches a [`SharedDict`](crate::dict::SharedDict)
//!   without owning it and fails fast when the dict changes mid-pass.

mod live;
mod values;

pub use live::{LiveValueView, LiveValues};
pub use values::{ValueView, Values};
