#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Locale tables for script-facing `i18n` lookups.
//!
//! A [`Locale`] publishes immutable [`LocaleTable`] snapshots. Lookups read
//! the current snapshot and never block writers; switching languages builds a
//! new snapshot from a [`LocaleSource`] and swaps it in atomically.
//!
//! Resolution order for a key:
//!
//! 1. the active language,
//! 2. the default language,
//! 3. the configured [`MissingPolicy`].

pub mod error;
pub mod lang_file;
pub mod resolver;
pub mod source;
pub mod strings;
pub mod table;

pub use error::{LocaleError, Result};
pub use resolver::{Locale, MissingPolicy, interpolate};
pub use source::{DirSource, LANG_FILE_EXTENSION, LocaleSource, MemorySource};
pub use strings::LocaleStrings;
pub use table::LocaleTable;
