//! Node handles and window narrowing.
//!
//! A [`Node`] is a cheap, clonable handle to shared node state. Handles stay
//! valid after the node is removed from its [`Document`](crate::Document);
//! they simply stop being reachable through `select`.
//!
//! Window-only behavior lives on [`Window`], obtainable only through
//! [`Node::as_window`] or [`Node::into_window`]. Both succeed exactly when the
//! node was created with [`Capability::Window`].
//!
//! Structural edits (`append_child`, `remove_child`, detaching on removal)
//! run under one process-wide tree lock, so the ancestor check and the link
//! it guards are a single step and the parent graph stays acyclic. Readers
//! (`parent`, `children`) never take it.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::{DocumentError, PropertyBag, Result, Value};

/// The fixed capability variant of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Capability {
	#[default]
	Plain,
	Window,
}

/// Creation parameters for [`Document::create`](crate::Document::create).
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
	pub(crate) capability: Capability,
	pub(crate) id: Option<String>,
	pub(crate) name: Option<String>,
	pub(crate) properties: PropertyBag,
}

impl NodeSpec {
	pub fn plain() -> Self {
		Self::default()
	}

	pub fn window() -> Self {
		Self {
			capability: Capability::Window,
			..Self::default()
		}
	}

	/// Explicit identity. Without one the registry assigns `node-<n>`.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Display label. Defaults to the identity.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Initial property, applied before the node becomes selectable.
	pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.set(key, value);
		self
	}

	pub fn capability(&self) -> Capability {
		self.capability
	}
}

/// Serializes every parent/child edit across all documents.
static TREE_LOCK: Mutex<()> = parking_lot::const_mutex(());

pub(crate) struct NodeInner {
	id: String,
	name: String,
	kind: NodeKind,
	properties: RwLock<PropertyBag>,
	parent: RwLock<Weak<NodeInner>>,
	children: RwLock<Vec<Node>>,
}

enum NodeKind {
	Plain,
	Window(Arc<WindowState>),
}

struct WindowState {
	title: RwLock<String>,
}

/// Shared handle to a document node.
///
/// Equality is identity: two handles are equal when they point at the same
/// node.
#[derive(Clone)]
pub struct Node {
	inner: Arc<NodeInner>,
}

impl Node {
	pub(crate) fn new(id: String, spec: NodeSpec, window_title: &str) -> Self {
		let kind = match spec.capability {
			Capability::Plain => NodeKind::Plain,
			Capability::Window => NodeKind::Window(Arc::new(WindowState {
				title: RwLock::new(window_title.to_owned()),
			})),
		};
		let name = spec.name.unwrap_or_else(|| id.clone());
		Self {
			inner: Arc::new(NodeInner {
				id,
				name,
				kind,
				properties: RwLock::new(spec.properties),
				parent: RwLock::new(Weak::new()),
				children: RwLock::new(Vec::new()),
			}),
		}
	}

	/// Stable identity assigned at creation.
	pub fn id(&self) -> &str {
		&self.inner.id
	}

	/// Human-readable label.
	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Stores `value` under `key`, overwriting any previous value.
	pub fn set_property(&self, key: impl Into<String>, value: impl Into<Value>) {
		self.inner.properties.write().set(key, value);
	}

	pub fn property(&self, key: &str) -> Option<Value> {
		self.inner.properties.read().get(key).cloned()
	}

	pub fn remove_property(&self, key: &str) -> Option<Value> {
		self.inner.properties.write().remove(key)
	}

	pub fn property_keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.inner.properties.read().keys().map(str::to_owned).collect();
		keys.sort_unstable();
		keys
	}

	/// Consistent copy of the whole bag.
	pub fn properties(&self) -> PropertyBag {
		self.inner.properties.read().clone()
	}

	pub fn capability(&self) -> Capability {
		match self.inner.kind {
			NodeKind::Plain => Capability::Plain,
			NodeKind::Window(_) => Capability::Window,
		}
	}

	pub fn is_window(&self) -> bool {
		matches!(self.inner.kind, NodeKind::Window(_))
	}

	/// Narrows to the window view when the node has that capability.
	pub fn as_window(&self) -> Option<Window> {
		match &self.inner.kind {
			NodeKind::Window(state) => Some(Window {
				node: self.clone(),
				state: Arc::clone(state),
			}),
			NodeKind::Plain => None,
		}
	}

	/// Owned narrowing; hands the node back unchanged on failure.
	pub fn into_window(self) -> std::result::Result<Window, Node> {
		match &self.inner.kind {
			NodeKind::Window(state) => {
				let state = Arc::clone(state);
				Ok(Window { node: self, state })
			}
			NodeKind::Plain => Err(self),
		}
	}

	pub fn parent(&self) -> Option<Node> {
		self.inner.parent.read().upgrade().map(|inner| Node { inner })
	}

	pub fn children(&self) -> Vec<Node> {
		self.inner.children.read().clone()
	}

	/// Attaches `child` as the last child of `self`, detaching it from any
	/// previous parent.
	///
	/// Fails with [`DocumentError::Cycle`] if `child` is `self` or one of its
	/// ancestors.
	pub fn append_child(&self, child: &Node) -> Result<()> {
		let _tree = TREE_LOCK.lock();
		if child == self || child.is_ancestor_of(self) {
			return Err(DocumentError::Cycle {
				parent: self.id().to_owned(),
				child: child.id().to_owned(),
			});
		}
		if let Some(previous) = child.parent() {
			if previous == *self {
				return Ok(());
			}
			previous.inner.children.write().retain(|c| c != child);
		}
		*child.inner.parent.write() = Arc::downgrade(&self.inner);
		self.inner.children.write().push(child.clone());
		Ok(())
	}

	/// Detaches `child` if it is a direct child. Returns whether it was.
	pub fn remove_child(&self, child: &Node) -> bool {
		let _tree = TREE_LOCK.lock();
		self.unlink_child(child)
	}

	/// Caller holds `TREE_LOCK`.
	fn unlink_child(&self, child: &Node) -> bool {
		{
			let mut children = self.inner.children.write();
			let Some(pos) = children.iter().position(|c| c == child) else {
				return false;
			};
			children.remove(pos);
		}
		*child.inner.parent.write() = Weak::new();
		true
	}

	/// Whether `self` appears on the parent chain of `other`.
	pub fn is_ancestor_of(&self, other: &Node) -> bool {
		let mut cursor = other.parent();
		while let Some(node) = cursor {
			if node == *self {
				return true;
			}
			cursor = node.parent();
		}
		false
	}

	/// `self` followed by every descendant, depth first.
	pub(crate) fn subtree(&self) -> Vec<Node> {
		let mut out = Vec::new();
		let mut stack = vec![self.clone()];
		while let Some(node) = stack.pop() {
			stack.extend(node.children().into_iter().rev());
			out.push(node);
		}
		out
	}

	pub(crate) fn detach(&self) {
		let _tree = TREE_LOCK.lock();
		if let Some(parent) = self.parent() {
			parent.unlink_child(self);
		}
	}
}

impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Eq for Node {}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Node")
			.field("id", &self.inner.id)
			.field("name", &self.inner.name)
			.field("capability", &self.capability())
			.finish_non_exhaustive()
	}
}

/// A node narrowed to the window capability.
///
/// Dereferences to [`Node`], so every plain operation stays available.
#[derive(Clone)]
pub struct Window {
	node: Node,
	state: Arc<WindowState>,
}

impl Window {
	pub fn set_title(&self, title: impl Into<String>) {
		*self.state.title.write() = title.into();
	}

	pub fn title(&self) -> String {
		self.state.title.read().clone()
	}

	pub fn as_node(&self) -> &Node {
		&self.node
	}

	pub fn into_node(self) -> Node {
		self.node
	}
}

impl Deref for Window {
	type Target = Node;

	fn deref(&self) -> &Node {
		&self.node
	}
}

impl From<Window> for Node {
	fn from(window: Window) -> Self {
		window.node
	}
}

impl PartialEq for Window {
	fn eq(&self, other: &Self) -> bool {
		self.node == other.node
	}
}

impl Eq for Window {}

impl PartialEq<Node> for Window {
	fn eq(&self, other: &Node) -> bool {
		self.node == *other
	}
}

impl fmt::Debug for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Window")
			.field("id", &self.node.inner.id)
			.field("title", &*self.state.title.read())
			.finish_non_exhaustive()
	}
}
