use chrono::{TimeZone, Utc};

use super::{camel_to_snake, convert_object, ends_with_at_to_date, parse_date, snake_to_camel};
use crate::plain::{Direction, Value};

#[test]
fn parse_date_accepts_rfc3339() {
	let instant = parse_date("2023-08-10T00:00:00Z").expect("rfc3339 parses");
	assert_eq!(instant, Utc.with_ymd_and_hms(2023, 8, 10, 0, 0, 0).unwrap());
}

#[test]
fn parse_date_accepts_offsets_and_naive_forms() {
	let offset = parse_date("2023-08-10T02:00:00+02:00").expect("offset form parses");
	assert_eq!(offset, Utc.with_ymd_and_hms(2023, 8, 10, 0, 0, 0).unwrap());

	let naive = parse_date("2023-08-10T12:30:00").expect("naive datetime parses");
	assert_eq!(naive, Utc.with_ymd_and_hms(2023, 8, 10, 12, 30, 0).unwrap());

	let date_only = parse_date("2023-08-10").expect("bare date parses");
	assert_eq!(date_only, Utc.with_ymd_and_hms(2023, 8, 10, 0, 0, 0).unwrap());
}

#[test]
fn parse_date_rejects_empty_and_garbage() {
	assert!(parse_date("").is_none());
	assert!(parse_date("invalid-date").is_none());
	assert!(parse_date("2023-13-40").is_none());
}

#[test]
fn scalars_pass_through_unchanged() {
	assert_eq!(convert_object(&Value::Null, Direction::Snake, true), Value::Null);
	assert_eq!(convert_object(&Value::Number(7.0), Direction::Camel, false), Value::Number(7.0));
	assert_eq!(convert_object(&Value::string("text"), Direction::Snake, true), Value::string("text"));
}

#[test]
fn map_keys_convert_in_both_directions() {
	let camel = Value::map(vec![Value::entry("camelCase", Value::string("value"))]);
	let expected_snake = Value::map(vec![Value::entry("camel_case", Value::string("value"))]);
	assert_eq!(convert_object(&camel, Direction::Snake, false), expected_snake);

	let snake = Value::map(vec![Value::entry("snake_case", Value::string("value"))]);
	let expected_camel = Value::map(vec![Value::entry("snakeCase", Value::string("value"))]);
	assert_eq!(convert_object(&snake, Direction::Camel, false), expected_camel);
}

#[test]
fn nested_composites_convert_recursively() {
	let input = Value::map(vec![
		Value::entry("outerKey", Value::map(vec![Value::entry("innerKey", Value::string("value"))])),
		Value::entry("arr", Value::array(vec![Value::map(vec![Value::entry("nestedKey", Value::string("value"))])])),
	]);
	let expected = Value::map(vec![
		Value::entry("outer_key", Value::map(vec![Value::entry("inner_key", Value::string("value"))])),
		Value::entry("arr", Value::array(vec![Value::map(vec![Value::entry("nested_key", Value::string("value"))])])),
	]);
	assert_eq!(convert_object(&input, Direction::Snake, false), expected);
}

#[test]
fn date_suffixed_strings_promote_on_the_original_key() {
	let instant = Utc.with_ymd_and_hms(2023, 8, 10, 0, 0, 0).unwrap();

	let camel = Value::map(vec![Value::entry("createdAt", Value::string("2023-08-10T00:00:00Z"))]);
	let converted = camel_to_snake(&camel);
	assert_eq!(converted, Value::map(vec![Value::entry("created_at", Value::date(instant))]));

	let snake = Value::map(vec![Value::entry("created_at", Value::string("2023-08-10T00:00:00Z"))]);
	let converted = snake_to_camel(&snake);
	assert_eq!(converted, Value::map(vec![Value::entry("createdAt", Value::date(instant))]));
}

#[test]
fn failed_or_empty_date_strings_degrade_to_null() {
	let input = Value::map(vec![
		Value::entry("updatedAt", Value::string("not a date")),
		Value::entry("deletedAt", Value::string("")),
	]);
	let expected = Value::map(vec![Value::entry("updated_at", Value::Null), Value::entry("deleted_at", Value::Null)]);
	assert_eq!(camel_to_snake(&input), expected);
}

#[test]
fn non_string_values_under_date_keys_are_untouched() {
	let instant = Utc.with_ymd_and_hms(2023, 8, 11, 0, 0, 0).unwrap();
	let input = Value::map(vec![
		Value::entry("createdAt", Value::date(instant)),
		Value::entry("countAt", Value::Number(5.0)),
	]);
	let expected = Value::map(vec![
		Value::entry("created_at", Value::date(instant)),
		Value::entry("count_at", Value::Number(5.0)),
	]);
	assert_eq!(camel_to_snake(&input), expected);
}

#[test]
fn dates_are_not_promoted_when_disabled() {
	let input = Value::map(vec![Value::entry("createdAt", Value::string("2023-08-10T00:00:00Z"))]);
	let expected = Value::map(vec![Value::entry("created_at", Value::string("2023-08-10T00:00:00Z"))]);
	assert_eq!(convert_object(&input, Direction::Snake, false), expected);
}

#[test]
fn ends_with_at_to_date_keeps_keys() {
	let input = Value::map(vec![
		Value::entry("created_at", Value::string("2023-08-10T00:00:00Z")),
		Value::entry("updatedAt", Value::string("2023-08-11T00:00:00Z")),
		Value::entry("name", Value::string("John")),
		Value::entry("age", Value::string("30")),
	]);
	let converted = ends_with_at_to_date(&input);
	let expected = Value::map(vec![
		Value::entry("created_at", Value::date(Utc.with_ymd_and_hms(2023, 8, 10, 0, 0, 0).unwrap())),
		Value::entry("updatedAt", Value::date(Utc.with_ymd_and_hms(2023, 8, 11, 0, 0, 0).unwrap())),
		Value::entry("name", Value::string("John")),
		Value::entry("age", Value::string("30")),
	]);
	assert_eq!(converted, expected);
}

#[test]
fn output_shares_no_composite_handles_with_input() {
	let inner = Value::map(vec![Value::entry("innerKey", Value::Number(1.0))]);
	let input = Value::map(vec![Value::entry("outerKey", inner.clone())]);
	let converted = convert_object(&input, Direction::Snake, false);

	assert_ne!(converted.identity(), input.identity());
	let Value::Map(entries) = &converted else {
		panic!("expected map output");
	};
	let converted_inner_identity = entries.borrow()[0].value.identity();
	assert_ne!(converted_inner_identity, inner.identity());
}

#[test]
fn array_order_and_length_are_preserved() {
	let input = Value::array(vec![Value::Number(1.0), Value::string("two"), Value::Bool(true)]);
	let converted = convert_object(&input, Direction::Camel, true);
	assert_eq!(converted, Value::array(vec![Value::Number(1.0), Value::string("two"), Value::Bool(true)]));
}
