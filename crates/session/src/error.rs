//! Error types for session startup.

use thiserror::Error;

/// Errors that can occur while initializing a session.
#[derive(Debug, Error)]
pub enum SessionError {
	/// A translation table could not be loaded.
	#[error(transparent)]
	Locale(#[from] lumen_locale::LocaleError),

	/// The configuration could not be read.
	#[error(transparent)]
	Config(#[from] lumen_config::ConfigError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
