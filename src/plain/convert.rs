use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::plain::{Direction, MapEntry, Value, convert_case};

/// Parse an ISO-8601-like string into a UTC instant.
///
/// Accepts RFC 3339 (`2023-08-10T00:00:00Z`, offsets included), a naive
/// datetime read as UTC, and a bare date taken as midnight UTC. Empty or
/// unparseable input is `None`, never an error.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
	if input.is_empty() {
		return None;
	}
	if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
		return Some(instant.with_timezone(&Utc));
	}
	if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
		return Some(naive.and_utc());
	}
	if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
		return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
	}
	None
}

/// Rewrite every map key in `value` per `direction`, recursing through
/// composites. Scalars pass through unchanged.
///
/// With `convert_dates` set, a string value whose original key ends in `_at`
/// or `At` is promoted through [`parse_date`]: success stores the instant,
/// failure or an empty string stores null. The input is never mutated; the
/// output shares no composite handles with it.
pub fn convert_object(value: &Value, direction: Direction, convert_dates: bool) -> Value {
	match value {
		Value::Array(items) => Value::array(items.borrow().iter().map(|item| convert_object(item, direction, convert_dates)).collect()),
		Value::Map(entries) => Value::map(entries.borrow().iter().map(|entry| convert_entry(entry, direction, convert_dates)).collect()),
		scalar => scalar.clone(),
	}
}

/// Convert camelCase keys to snake_case, promoting `_at`/`At` date strings.
pub fn camel_to_snake(value: &Value) -> Value {
	convert_object(value, Direction::Snake, true)
}

/// Convert snake_case keys to camelCase, promoting `_at`/`At` date strings.
pub fn snake_to_camel(value: &Value) -> Value {
	convert_object(value, Direction::Camel, true)
}

/// Promote `_at`/`At` date strings without touching key casing.
pub fn ends_with_at_to_date(value: &Value) -> Value {
	convert_object(value, Direction::None, true)
}

fn convert_entry(entry: &MapEntry, direction: Direction, convert_dates: bool) -> MapEntry {
	let key = convert_case(&entry.key, direction);
	let converted = convert_object(&entry.value, direction, convert_dates);
	let value = if convert_dates && has_date_suffix(&entry.key) {
		promote_date(converted)
	} else {
		converted
	};
	MapEntry { key, value }
}

/// The suffix test runs against the original key, in both casings, so the
/// promotion is direction-independent.
fn has_date_suffix(key: &str) -> bool {
	key.ends_with("_at") || key.ends_with("At")
}

fn promote_date(value: Value) -> Value {
	match value {
		Value::String(text) => match parse_date(&text) {
			Some(instant) => Value::date(instant),
			None => Value::Null,
		},
		other => other,
	}
}

#[cfg(test)]
mod tests;
