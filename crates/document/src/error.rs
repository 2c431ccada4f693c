//! Error types for document mutations.

use thiserror::Error;

/// Errors raised by host-side document operations.
///
/// Script-facing lookups never produce these; a missing node is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	/// The identity is empty or contains whitespace/control characters.
	#[error("invalid node identity {id:?}: {reason}")]
	InvalidIdentity {
		/// The rejected identity.
		id: String,
		/// Why it was rejected.
		reason: &'static str,
	},

	/// Another live node already owns this identity.
	#[error("node identity '{0}' is already registered")]
	DuplicateIdentity(String),

	/// The identity belonged to a node that was removed earlier.
	#[error("node identity '{0}' was retired and cannot be reused")]
	RetiredIdentity(String),

	/// Appending would make a node its own ancestor.
	#[error("cannot append '{child}' under '{parent}': would create a cycle")]
	Cycle {
		/// Identity of the intended parent.
		parent: String,
		/// Identity of the intended child.
		child: String,
	},
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
