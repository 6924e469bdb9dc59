use chrono::SecondsFormat;

use crate::plain::{MapEntry, Value};

/// Lift a parsed JSON document into the domain [`Value`] model.
///
/// Numbers become `f64`, object entries keep their iteration order. JSON has
/// no absent slots, dates, or opaque host values, so those variants never
/// come out of this function.
pub fn from_json(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(flag) => Value::Bool(*flag),
		serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
		serde_json::Value::String(text) => Value::String(text.clone()),
		serde_json::Value::Array(items) => Value::array(items.iter().map(from_json).collect()),
		serde_json::Value::Object(entries) => Value::map(
			entries
				.iter()
				.map(|(key, value)| MapEntry {
					key: key.clone(),
					value: from_json(value),
				})
				.collect(),
		),
	}
}

/// Render a domain [`Value`] as JSON.
///
/// Valid dates render as RFC 3339 strings; invalid dates and non-finite
/// numbers render as null. Absent and opaque values are dropped from maps and
/// render as null inside arrays, the disposition JSON serializers take for
/// undefined and function members. Total function; cyclic input is the
/// caller's problem, as with any tree serializer.
pub fn to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Absent | Value::Null | Value::Opaque(_) => serde_json::Value::Null,
		Value::Bool(flag) => serde_json::Value::Bool(*flag),
		Value::Number(number) => serde_json::Number::from_f64(*number).map_or(serde_json::Value::Null, serde_json::Value::Number),
		Value::String(text) => serde_json::Value::String(text.clone()),
		Value::Date(Some(instant)) => serde_json::Value::String(instant.to_rfc3339_opts(SecondsFormat::Secs, true)),
		Value::Date(None) => serde_json::Value::Null,
		Value::Array(items) => serde_json::Value::Array(items.borrow().iter().map(to_json).collect()),
		Value::Map(entries) => serde_json::Value::Object(
			entries
				.borrow()
				.iter()
				.filter(|entry| !matches!(entry.value, Value::Absent | Value::Opaque(_)))
				.map(|entry| (entry.key.clone(), to_json(&entry.value)))
				.collect(),
		),
	}
}
