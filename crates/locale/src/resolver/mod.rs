//! Key-to-string resolution over swappable snapshots.
//!
//! # Invariants
//!
//! - `i18n` is a pure function of the key and the snapshot it loaded; it
//!   never observes a half-applied language switch.
//! - Writers (`set_lang`, `set_default_lang`, `reload`) each hold the writer
//!   lock from reading the current snapshot through publishing the next one,
//!   and publish exactly once. A failed load leaves the published snapshot
//!   untouched.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{LocaleSource, LocaleStrings, LocaleTable, Result};

/// What `i18n` returns for a key no table provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
	/// Return the key unchanged.
	#[default]
	Key,
	/// Return an empty string.
	Blank,
}

impl MissingPolicy {
	pub fn resolve(self, key: &str) -> String {
		match self {
			Self::Key => key.to_owned(),
			Self::Blank => String::new(),
		}
	}
}

/// Process-wide translation state.
pub struct Locale {
	source: Box<dyn LocaleSource>,
	table: ArcSwap<LocaleTable>,
	missing: MissingPolicy,
	writer: Mutex<()>,
}

impl fmt::Debug for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let table = self.table.load();
		f.debug_struct("Locale")
			.field("lang", &table.lang())
			.field("default_lang", &table.default_lang())
			.field("missing", &self.missing)
			.finish_non_exhaustive()
	}
}

impl Locale {
	/// Empty locale backed by `source`. Nothing is loaded until a language
	/// is set.
	pub fn new(source: impl LocaleSource + 'static) -> Self {
		Self {
			source: Box::new(source),
			table: ArcSwap::from_pointee(LocaleTable::default()),
			missing: MissingPolicy::default(),
			writer: Mutex::new(()),
		}
	}

	pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
		self.missing = policy;
		self
	}

	/// Publishes a prebuilt table, bypassing the source.
	pub fn with_table(self, table: LocaleTable) -> Self {
		self.table.store(Arc::new(table));
		self
	}

	pub fn missing_policy(&self) -> MissingPolicy {
		self.missing
	}

	/// The currently published snapshot.
	pub fn snapshot(&self) -> Arc<LocaleTable> {
		self.table.load_full()
	}

	/// Resolves `key` verbatim, without interpolation.
	pub fn i18n(&self, key: &str) -> String {
		let table = self.table.load();
		match table.lookup(key) {
			Some(value) => value.to_owned(),
			None => {
				tracing::debug!(key, "missing translation");
				self.missing.resolve(key)
			}
		}
	}

	/// Resolves `key`, then substitutes `{name}` tokens from `args`.
	pub fn i18n_format(&self, key: &str, args: &[(&str, &str)]) -> String {
		interpolate(&self.i18n(key), args)
	}

	/// Activates `lang`.
	///
	/// Setting the already-active language merges the freshly loaded entries
	/// over the current ones. On failure the previous snapshot stays live.
	pub fn set_lang(&self, lang: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let current = self.table.load_full();
		let next = self.with_active(&current, lang, true)?;
		self.table.store(Arc::new(next));
		tracing::info!(lang, "locale set");
		Ok(())
	}

	/// Replaces the fallback language consulted after the active one.
	pub fn set_default_lang(&self, lang: &str) -> Result<()> {
		let _guard = self.writer.lock();
		let current = self.table.load_full();
		let next = self.with_default(&current, lang)?;
		self.table.store(Arc::new(next));
		tracing::info!(lang, "default locale set");
		Ok(())
	}

	/// Re-reads both languages from the source, replacing their entries.
	///
	/// Both loads are attempted and the first failure is returned. Nothing is
	/// published unless every load succeeds.
	pub fn reload(&self) -> Result<()> {
		let _guard = self.writer.lock();
		let current = self.table.load_full();
		let default = match current.default_lang() {
			Some(lang) => self.with_default(&current, lang).map(Some),
			None => Ok(None),
		};
		let base = match &default {
			Ok(Some(table)) => table,
			_ => &*current,
		};
		let active = match current.lang() {
			Some(lang) => self.with_active(base, lang, false).map(Some),
			None => Ok(None),
		};
		let next = match (default?, active?) {
			(_, Some(table)) | (Some(table), None) => table,
			(None, None) => return Ok(()),
		};
		self.table.store(Arc::new(next));
		tracing::info!(lang = ?current.lang(), default_lang = ?current.default_lang(), "locale reloaded");
		Ok(())
	}

	pub fn lang(&self) -> Option<String> {
		self.table.load().lang().map(str::to_owned)
	}

	pub fn default_lang(&self) -> Option<String> {
		self.table.load().default_lang().map(str::to_owned)
	}

	/// Languages the backing source can provide.
	pub fn languages(&self) -> Result<Vec<String>> {
		self.source.languages()
	}

	/// `base` with its active table loaded from `lang`. Caller holds `writer`.
	fn with_active(&self, base: &LocaleTable, lang: &str, merge_same: bool) -> Result<LocaleTable> {
		let strings = self.load_logged(lang, "active")?;
		let strings = if merge_same && base.lang() == Some(lang) {
			let mut merged: LocaleStrings = base.strings().clone();
			merged.merge(strings);
			merged
		} else {
			strings
		};
		Ok(base.replace_active(lang.to_owned(), strings))
	}

	/// `base` with its default table loaded from `lang`. Caller holds `writer`.
	fn with_default(&self, base: &LocaleTable, lang: &str) -> Result<LocaleTable> {
		let strings = self.load_logged(lang, "default")?;
		Ok(base.replace_default(lang.to_owned(), strings))
	}

	fn load_logged(&self, lang: &str, role: &'static str) -> Result<LocaleStrings> {
		self.source.load(lang).inspect_err(|error| {
			tracing::warn!(lang, role, %error, "failed to load locale");
		})
	}
}

/// Replaces each `{name}` token with the matching argument in one pass.
///
/// Unknown tokens and unbalanced braces are copied through unchanged;
/// substituted text is never re-scanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let Some(close) = after.find('}') else {
			out.push_str(&rest[open..]);
			return out;
		};
		let name = &after[..close];
		if name.contains('{') {
			out.push('{');
			rest = after;
			continue;
		}
		match args.iter().find(|(k, _)| *k == name) {
			Some((_, value)) => out.push_str(value),
			None => {
				out.push('{');
				out.push_str(name);
				out.push('}');
			}
		}
		rest = &after[close + 1..];
	}
	out.push_str(rest);
	out
}
