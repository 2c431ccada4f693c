//! Per-node property storage.

use rustc_hash::FxHashMap;

use crate::Value;

/// Mapping from property key to an untyped [`Value`].
///
/// Keys are unique and the last write wins. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
	entries: FxHashMap<String, Value>,
}

impl PropertyBag {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value` under `key`, returning whatever it replaced.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.entries.remove(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut bag = Self::new();
		for (key, value) in iter {
			bag.set(key, value);
		}
		bag
	}
}
