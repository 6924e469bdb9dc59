use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

/// Shared handle to a sequence composite.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Shared handle to a keyed composite.
pub type MapRef = Rc<RefCell<Vec<MapEntry>>>;

/// One key/value pair inside a [`Value::Map`], insertion-ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Entry key.
	pub key: String,
	/// Entry value.
	pub value: Value,
}

/// A runtime value as it arrives from a loosely-typed host payload.
///
/// Composites are reference types: cloning an `Array` or `Map` clones the
/// handle, so caller data can alias subtrees or form cycles. Everything that
/// cares about termination keys off [`Value::identity`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// A missing slot, distinct from an explicit null.
	Absent,
	/// Explicit null.
	Null,
	/// Boolean.
	Bool(bool),
	/// Numeric value; may be non-finite, which classification rejects.
	Number(f64),
	/// String.
	String(String),
	/// A date instant, or `None` for the invalid-date sentinel.
	Date(Option<DateTime<Utc>>),
	/// A host value that is never plain (function, symbol); label names the kind.
	Opaque(&'static str),
	/// Ordered sequence composite.
	Array(ArrayRef),
	/// Keyed mapping composite with insertion-ordered entries.
	Map(MapRef),
}

impl Value {
	/// Build an owned string value.
	pub fn string(text: impl Into<String>) -> Self {
		Value::String(text.into())
	}

	/// Build a valid date value.
	pub fn date(instant: DateTime<Utc>) -> Self {
		Value::Date(Some(instant))
	}

	/// Build the invalid-date sentinel.
	pub fn invalid_date() -> Self {
		Value::Date(None)
	}

	/// Build a fresh array composite from `items`.
	pub fn array(items: Vec<Value>) -> Self {
		Value::Array(Rc::new(RefCell::new(items)))
	}

	/// Build a fresh map composite from `entries`.
	pub fn map(entries: Vec<MapEntry>) -> Self {
		Value::Map(Rc::new(RefCell::new(entries)))
	}

	/// Build a map entry.
	pub fn entry(key: impl Into<String>, value: Value) -> MapEntry {
		MapEntry { key: key.into(), value }
	}

	/// True for `Array` and `Map`.
	pub fn is_composite(&self) -> bool {
		matches!(self, Value::Array(_) | Value::Map(_))
	}

	/// Allocation address of a composite, used as reference identity for
	/// cycle tracking. `None` for scalars.
	pub fn identity(&self) -> Option<usize> {
		match self {
			Value::Array(items) => Some(Rc::as_ptr(items) as usize),
			Value::Map(entries) => Some(Rc::as_ptr(entries) as usize),
			_ => None,
		}
	}

	/// Short label for the value's kind, for diagnostics and reports.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Absent => "absent",
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Date(_) => "date",
			Value::Opaque(_) => "opaque",
			Value::Array(_) => "array",
			Value::Map(_) => "map",
		}
	}
}
