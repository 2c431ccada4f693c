#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Session state shared by every embedded script.
//!
//! A [`Session`] is initialized once before any script runs and torn down
//! when the hosting session ends. Scripts never touch it directly: the host
//! hands them a [`ScriptContext`], whose methods are the complete scripting
//! surface.
//!
//! | Operation | Method |
//! |---|---|
//! | `select` | [`ScriptContext::select`] |
//! | `setProperty` | [`ScriptContext::set_property`] |
//! | `getName` | [`ScriptContext::get_name`] |
//! | `isWindow` | [`ScriptContext::is_window`] / [`ScriptContext::as_window`] |
//! | `setTitle` | [`ScriptContext::set_title`] |
//! | `i18n` | [`ScriptContext::i18n`] |

mod context;
pub mod error;

pub use context::ScriptContext;
pub use error::{Result, SessionError};
pub use lumen_config::Config;
pub use lumen_document::{Capability, Document, Node, NodeSpec, Value, Window};
pub use lumen_locale::{DirSource, Locale, LocaleSource, MemorySource, MissingPolicy};

/// The process-wide node registry and locale.
#[derive(Debug)]
pub struct Session {
	document: Document,
	locale: Locale,
}

impl Session {
	/// Builds the session from configuration, loading the default language
	/// and then the active one from `config.locale.dir`.
	pub fn init(config: &Config) -> Result<Self> {
		let source = DirSource::new(&config.locale.dir);
		let locale = Locale::new(source).with_missing_policy(config.locale.missing);
		locale.set_default_lang(&config.locale.default_lang)?;
		locale.set_lang(&config.locale.lang)?;
		let document = Document::with_window_title(config.document.window_title.clone());
		tracing::info!(
			lang = %config.locale.lang,
			default_lang = %config.locale.default_lang,
			dir = %config.locale.dir.display(),
			"session initialized"
		);
		Ok(Self::with_parts(document, locale))
	}

	/// Reads configuration from `path`, then [`init`](Self::init)s.
	pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
		let config = Config::load(path)?;
		Self::init(&config)
	}

	/// Session from parts assembled by the host.
	pub fn with_parts(document: Document, locale: Locale) -> Self {
		Self { document, locale }
	}

	/// The handle passed to scripts.
	pub fn context(&self) -> ScriptContext<'_> {
		ScriptContext::new(&self.document, &self.locale)
	}

	/// Host-side registry access (creating and removing nodes).
	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	/// Releases every node. Returns how many were registered.
	pub fn teardown(self) -> usize {
		let released = self.document.clear();
		tracing::info!(released, "session torn down");
		released
	}
}
