//! Identity-indexed node registry.
//!
//! # Invariants
//!
//! - `by_id` holds at most one node per identity.
//! - Identities removed from `by_id` move to `retired` and are rejected by
//!   every later `create` on the same registry.
//! - Auto-assigned identities skip anything live or retired.

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{DocumentError, Node, NodeSpec, Result};

/// Title given to windows when the host configures none.
pub const DEFAULT_WINDOW_TITLE: &str = "[untitled]";

const AUTO_ID_PREFIX: &str = "node-";

#[derive(Default)]
struct Index {
	by_id: FxHashMap<String, Node>,
	retired: FxHashSet<String>,
	next_auto: u64,
}

impl Index {
	fn next_auto_id(&mut self) -> String {
		loop {
			self.next_auto += 1;
			let id = format!("{AUTO_ID_PREFIX}{}", self.next_auto);
			if !self.by_id.contains_key(&id) && !self.retired.contains(&id) {
				return id;
			}
		}
	}
}

/// Owner of every node reachable by identity.
pub struct Document {
	index: RwLock<Index>,
	window_title: String,
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let index = self.index.read();
		f.debug_struct("Document")
			.field("nodes", &index.by_id.len())
			.field("retired", &index.retired.len())
			.field("window_title", &self.window_title)
			.finish()
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	pub fn new() -> Self {
		Self::with_window_title(DEFAULT_WINDOW_TITLE)
	}

	/// Registry whose new windows start with `title`.
	pub fn with_window_title(title: impl Into<String>) -> Self {
		Self {
			index: RwLock::new(Index::default()),
			window_title: title.into(),
		}
	}

	/// Creates and registers a node.
	pub fn create(&self, spec: NodeSpec) -> Result<Node> {
		let mut index = self.index.write();
		let id = match spec.id.clone() {
			Some(id) => {
				validate_identity(&id)?;
				if index.by_id.contains_key(&id) {
					return Err(DocumentError::DuplicateIdentity(id));
				}
				if index.retired.contains(&id) {
					return Err(DocumentError::RetiredIdentity(id));
				}
				id
			}
			None => index.next_auto_id(),
		};

		let capability = spec.capability();
		let node = Node::new(id.clone(), spec, &self.window_title);
		index.by_id.insert(id, node.clone());
		tracing::debug!(id = %node.id(), ?capability, "node registered");
		Ok(node)
	}

	/// Resolves an identity. Unknown or malformed identities yield `None`.
	pub fn select(&self, id: &str) -> Option<Node> {
		self.index.read().by_id.get(id).cloned()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.read().by_id.contains_key(id)
	}

	/// Unregisters the node and its whole subtree, detaching it from its
	/// parent. Every removed identity is retired.
	///
	/// Returns the removed root; outstanding handles keep working on the
	/// detached nodes.
	pub fn remove(&self, id: &str) -> Option<Node> {
		let root = self.select(id)?;
		root.detach();

		let subtree = root.subtree();
		let mut index = self.index.write();
		let mut removed = 0usize;
		for node in &subtree {
			let owned = index.by_id.get(node.id()).is_some_and(|n| n == node);
			if owned {
				index.by_id.remove(node.id());
				index.retired.insert(node.id().to_owned());
				removed += 1;
			}
		}
		tracing::debug!(id = %root.id(), removed, "node subtree removed");
		Some(root)
	}

	pub fn len(&self) -> usize {
		self.index.read().by_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.read().by_id.is_empty()
	}

	/// Registered identities, sorted.
	pub fn ids(&self) -> Vec<String> {
		let mut ids: Vec<String> = self.index.read().by_id.keys().cloned().collect();
		ids.sort_unstable();
		ids
	}

	/// Unregisters every node, retiring all identities. Returns how many
	/// nodes were released.
	pub fn clear(&self) -> usize {
		let mut index = self.index.write();
		let drained: Vec<String> = index.by_id.drain().map(|(id, _)| id).collect();
		let count = drained.len();
		index.retired.extend(drained);
		count
	}

	pub fn window_title(&self) -> &str {
		&self.window_title
	}
}

/// Rejects identities that could never be selected reliably by scripts.
pub fn validate_identity(id: &str) -> Result<()> {
	let reason = if id.is_empty() {
		"identity is empty"
	} else if id.chars().any(char::is_whitespace) {
		"identity contains whitespace"
	} else if id.chars().any(char::is_control) {
		"identity contains control characters"
	} else {
		return Ok(());
	};
	Err(DocumentError::InvalidIdentity {
		id: id.to_owned(),
		reason,
	})
}
