//! Flat key/value translation storage for one language.

use rustc_hash::FxHashMap;

/// Translations of a single language, keyed by dotted translation keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
	strings: FxHashMap<String, String>,
}

impl LocaleStrings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.strings.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.strings.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.strings.contains_key(key)
	}

	/// Overlays `other`; its entries win on conflict.
	pub fn merge(&mut self, other: LocaleStrings) {
		self.strings.extend(other.strings);
	}

	pub fn len(&self) -> usize {
		self.strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.strings.keys().map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut strings = Self::new();
		for (key, value) in iter {
			strings.insert(key, value);
		}
		strings
	}
}
