//! Immutable lookup snapshot.

use std::sync::Arc;

use crate::LocaleStrings;

/// Active and default translations at one point in time.
///
/// Tables are never mutated after publication; [`Locale`](crate::Locale)
/// replaces them wholesale.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
	lang: Option<String>,
	strings: Arc<LocaleStrings>,
	default_lang: Option<String>,
	default_strings: Arc<LocaleStrings>,
}

impl LocaleTable {
	/// A table with only an active language and no default.
	pub fn new(lang: impl Into<String>, strings: LocaleStrings) -> Self {
		Self {
			lang: Some(lang.into()),
			strings: Arc::new(strings),
			..Self::default()
		}
	}

	pub fn with_default(mut self, lang: impl Into<String>, strings: LocaleStrings) -> Self {
		self.default_lang = Some(lang.into());
		self.default_strings = Arc::new(strings);
		self
	}

	/// Active language first, then the default language.
	pub fn lookup(&self, key: &str) -> Option<&str> {
		self.strings.get(key).or_else(|| self.default_strings.get(key))
	}

	pub fn lang(&self) -> Option<&str> {
		self.lang.as_deref()
	}

	pub fn default_lang(&self) -> Option<&str> {
		self.default_lang.as_deref()
	}

	pub fn strings(&self) -> &LocaleStrings {
		&self.strings
	}

	pub fn default_strings(&self) -> &LocaleStrings {
		&self.default_strings
	}

	pub(crate) fn replace_active(&self, lang: String, strings: LocaleStrings) -> Self {
		Self {
			lang: Some(lang),
			strings: Arc::new(strings),
			default_lang: self.default_lang.clone(),
			default_strings: Arc::clone(&self.default_strings),
		}
	}

	pub(crate) fn replace_default(&self, lang: String, strings: LocaleStrings) -> Self {
		Self {
			lang: self.lang.clone(),
			strings: Arc::clone(&self.strings),
			default_lang: Some(lang),
			default_strings: Arc::new(strings),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn active_shadows_default() {
		let table = LocaleTable::new("de", [("menu.quit", "Beenden")].into_iter().collect())
			.with_default("en", [("menu.quit", "Quit"), ("menu.start", "Start")].into_iter().collect());

		assert_eq!(table.lookup("menu.quit"), Some("Beenden"));
		assert_eq!(table.lookup("menu.start"), Some("Start"));
		assert_eq!(table.lookup("menu.help"), None);
		assert_eq!(table.lang(), Some("de"));
		assert_eq!(table.default_lang(), Some("en"));
	}

	#[test]
	fn empty_table_finds_nothing() {
		assert_eq!(LocaleTable::default().lookup("anything"), None);
	}
}
