//! Error types for locale loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading translation tables.
#[derive(Debug, Error)]
pub enum LocaleError {
	/// The language tag cannot name a translation file.
	#[error("invalid language tag {0:?}")]
	InvalidLang(String),

	/// The source has no table for this language.
	#[error("no translations for language '{0}'")]
	UnknownLang(String),

	/// A translation file could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path of the file or directory that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A translation file is malformed.
	#[error("parse error in '{lang}' at line {line}: {message}")]
	Parse {
		/// Language being loaded.
		lang: String,
		/// 1-based line where the problem starts.
		line: usize,
		/// What went wrong.
		message: &'static str,
	},
}

/// Result type for locale operations.
pub type Result<T> = std::result::Result<T, LocaleError>;
