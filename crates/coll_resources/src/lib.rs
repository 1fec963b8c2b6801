//! Message resolution for the collections crates.
//!
//! Errors raised by the collections never format their own text. They name a
//! message identifier plus positional arguments, and this crate turns that
//! into a localized string:
//! - `MessageId` - the identifiers the error factory knows about
//! - `Locale` - which built-in template table is active
//! - `MessageCatalog` - a locale table plus caller overrides
//! - `install` / `catalog` - the process-wide, read-only catalog

mod catalog;
mod format;
mod locale;
mod message;
mod tables;
mod util;

pub use catalog::{
    CatalogConfig, CatalogError, LOCALE_ENV, MessageCatalog, catalog, install, resolve,
    resolve_with,
};
pub use format::format_template;
pub use locale::Locale;
pub use message::MessageId;
pub use util::{find_best_match, levenshtein_distance};
