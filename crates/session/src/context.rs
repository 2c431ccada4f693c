use lumen_document::{Document, Node, Value, Window};
use lumen_locale::Locale;

/// Borrowed view of a [`Session`](crate::Session) handed to scripts.
///
/// Every method is synchronous and bounded. None of them fail: absence is
/// `None`, and window-only operations take a [`Window`], which can only be
/// obtained by narrowing a node whose capability allows it.
#[derive(Debug, Clone, Copy)]
pub struct ScriptContext<'a> {
	document: &'a Document,
	locale: &'a Locale,
}

impl<'a> ScriptContext<'a> {
	pub fn new(document: &'a Document, locale: &'a Locale) -> Self {
		Self { document, locale }
	}

	pub fn select(&self, id: &str) -> Option<Node> {
		self.document.select(id)
	}

	pub fn set_property(&self, node: &Node, key: &str, value: impl Into<Value>) {
		node.set_property(key, value);
	}

	pub fn get_name(&self, node: &Node) -> String {
		node.name().to_owned()
	}

	pub fn is_window(&self, node: &Node) -> bool {
		node.is_window()
	}

	/// The narrowing form of [`is_window`](Self::is_window).
	pub fn as_window(&self, node: &Node) -> Option<Window> {
		node.as_window()
	}

	pub fn set_title(&self, window: &Window, title: &str) {
		window.set_title(title);
	}

	pub fn i18n(&self, key: &str) -> String {
		self.locale.i18n(key)
	}

	pub fn i18n_format(&self, key: &str, args: &[(&str, &str)]) -> String {
		self.locale.i18n_format(key, args)
	}
}
