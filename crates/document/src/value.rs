//! Untyped property payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A script-supplied property value.
///
/// The document makes no claim about value shapes; consumers check the
/// variant they expect through the `as_*` accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	UInt(u64),
	Float(f64),
	String(String),
	Array(Vec<Value>),
	Map(BTreeMap<String, Value>),
}

impl Value {
	/// Short name of the variant, for diagnostics.
	pub const fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::UInt(_) => "uint",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
		}
	}

	pub const fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub const fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Signed view, accepting unsigned values that fit.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(i) => Some(*i),
			Self::UInt(u) => i64::try_from(*u).ok(),
			_ => None,
		}
	}

	/// Unsigned view, accepting non-negative signed values.
	pub fn as_uint(&self) -> Option<u64> {
		match self {
			Self::UInt(u) => Some(*u),
			Self::Int(i) => u64::try_from(*i).ok(),
			_ => None,
		}
	}

	/// Float view; integers widen.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(f) => Some(*f),
			Self::Int(i) => Some(*i as f64),
			Self::UInt(u) => Some(*u as f64),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Int(i) => write!(f, "{i}"),
			Self::UInt(u) => write!(f, "{u}"),
			Self::Float(x) => write!(f, "{x}"),
			Self::String(s) => f.write_str(s),
			Self::Array(_) | Self::Map(_) => match serde_json::to_string(self) {
				Ok(json) => f.write_str(&json),
				Err(_) => Err(fmt::Error),
			},
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Self::$variant(value.into())
			}
		})*
	};
}

impl_from! {
	bool => Bool,
	i32 => Int,
	i64 => Int,
	u32 => UInt,
	u64 => UInt,
	f32 => Float,
	f64 => Float,
	String => String,
	&str => String,
	Vec<Value> => Array,
	BTreeMap<String, Value> => Map,
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Self::Int(i)
				} else if let Some(u) = n.as_u64() {
					Self::UInt(u)
				} else {
					n.as_f64().map_or(Self::Null, Self::Float)
				}
			}
			serde_json::Value::String(s) => Self::String(s),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
		}
	}
}
