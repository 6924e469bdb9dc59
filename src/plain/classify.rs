use std::collections::HashSet;

use crate::plain::Value;

/// Decide whether a single scalar is plain, meaning it serializes as an
/// ordinary JSON-shaped leaf.
///
/// Absent slots count as plain so sparse and optional fields pass; non-finite
/// numbers, the invalid-date sentinel, opaque host values, and composites do
/// not. Composites are the domain of [`is_plain_object`]. Total function, no
/// side effects.
pub fn is_plain_value(value: &Value) -> bool {
	match value {
		Value::Absent | Value::Null | Value::Bool(_) | Value::String(_) => true,
		Value::Number(number) => number.is_finite(),
		Value::Date(instant) => instant.is_some(),
		Value::Opaque(_) | Value::Array(_) | Value::Map(_) => false,
	}
}

/// Decide whether a composite is plain: every element or entry value is a
/// plain scalar or recursively a plain composite, with no reference cycles.
///
/// Non-composite input, including null, is not a plain object. A composite
/// that contains itself, directly or through any nested path, is rejected.
/// The input is never mutated or retained.
pub fn is_plain_object(value: &Value) -> bool {
	let mut visiting = HashSet::new();
	is_plain_composite(value, &mut visiting)
}

/// Recursive worker. `visiting` holds the identities of the composites on the
/// current descent path; entering one twice means a cycle. Entries are removed
/// on exit so a node shared between sibling subtrees is classified normally.
fn is_plain_composite(value: &Value, visiting: &mut HashSet<usize>) -> bool {
	let Some(identity) = value.identity() else {
		return false;
	};
	if !visiting.insert(identity) {
		return false;
	}

	let plain = match value {
		Value::Array(items) => items.borrow().iter().all(|item| is_plain_value(item) || is_plain_composite(item, visiting)),
		Value::Map(entries) => entries
			.borrow()
			.iter()
			.filter(|entry| !matches!(entry.value, Value::Absent))
			.all(|entry| is_plain_value(&entry.value) || is_plain_composite(&entry.value, visiting)),
		_ => false,
	};

	visiting.remove(&identity);
	plain
}
