#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Retained-mode node tree exposed to embedded scripts.
//!
//! A [`Document`] owns every [`Node`] and resolves string identities to
//! shared node handles. Each node carries an untyped [`PropertyBag`] and a
//! fixed [`Capability`]. Window-capable nodes narrow to [`Window`], the only
//! type that can change a title, so calling a window operation on a plain
//! node is a type error rather than a runtime failure.
//!
//! # Invariants
//!
//! - An identity maps to at most one registered node, and a removed identity
//!   is never handed out again by the same [`Document`].
//! - A node's capability is chosen at creation and never changes.
//! - `select` never fails: unknown or malformed identities yield `None`.

pub mod error;
pub mod node;
pub mod properties;
pub mod registry;
pub mod value;

pub use error::{DocumentError, Result};
pub use node::{Capability, Node, NodeSpec, Window};
pub use properties::PropertyBag;
pub use registry::{DEFAULT_WINDOW_TITLE, Document};
pub use value::Value;
