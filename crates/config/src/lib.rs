//! Configuration for a scripting session.
//!
//! Configuration is written in TOML. Every field has a default, so an empty
//! file (or no file at all) yields a usable [`Config`].
//!
//! ```toml
//! [locale]
//! dir = "lang"            # directory holding <lang>.lang files
//! lang = "en"             # active language
//! default_lang = "en"     # consulted when the active language lacks a key
//! missing = "key"         # "key" or "blank"
//!
//! [document]
//! window_title = "[untitled]"
//! ```
//!
//! A relative `locale.dir` is resolved against the directory of the file it
//! was loaded from.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use lumen_document::DEFAULT_WINDOW_TITLE;
pub use lumen_locale::MissingPolicy;
use serde::Deserialize;

/// Parsed session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub locale: LocaleConfig,
	pub document: DocumentConfig,
}

/// `[locale]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleConfig {
	/// Directory of translation files.
	pub dir: PathBuf,
	/// Language activated at startup.
	pub lang: String,
	/// Fallback language.
	pub default_lang: String,
	/// Result for keys no table provides.
	pub missing: MissingPolicy,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("lang"),
			lang: "en".to_owned(),
			default_lang: "en".to_owned(),
			missing: MissingPolicy::Key,
		}
	}
}

/// `[document]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
	/// Title given to newly created windows.
	pub window_title: String,
}

impl Default for DocumentConfig {
	fn default() -> Self {
		Self {
			window_title: DEFAULT_WINDOW_TITLE.to_owned(),
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let mut config = Self::parse(&content)?;
		if let Some(base) = path.parent() {
			config.resolve_paths(base);
		}
		Ok(config)
	}

	/// Anchors relative paths at `base`.
	pub fn resolve_paths(&mut self, base: &Path) {
		if self.locale.dir.is_relative() {
			self.locale.dir = base.join(&self.locale.dir);
		}
	}

	fn validate(&self) -> Result<()> {
		for (field, value) in [("lang", &self.locale.lang), ("default_lang", &self.locale.default_lang)] {
			if lumen_locale::source::validate_lang(value).is_err() {
				return Err(ConfigError::InvalidLang {
					field,
					value: value.clone(),
				});
			}
		}
		Ok(())
	}
}
