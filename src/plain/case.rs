use std::str::FromStr;

use crate::plain::{PlainError, Result};

/// Requested key-casing direction for string and object conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Rewrite camelCase to snake_case.
	Snake,
	/// Rewrite snake_case to camelCase.
	Camel,
	/// Leave casing untouched.
	None,
}

impl FromStr for Direction {
	type Err = PlainError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"snake" => Ok(Direction::Snake),
			"camel" => Ok(Direction::Camel),
			"none" => Ok(Direction::None),
			other => Err(PlainError::InvalidDirection { value: other.to_owned() }),
		}
	}
}

/// Insert an underscore before every ASCII uppercase letter and lowercase it.
///
/// The rewrite is mechanical: a leading uppercase letter produces a leading
/// underscore (`"HelloWorld"` becomes `"_hello_world"`), and non-ASCII
/// characters pass through untouched.
pub fn to_snake_case(input: &str) -> String {
	let mut out = String::with_capacity(input.len() + 4);
	for ch in input.chars() {
		if ch.is_ascii_uppercase() {
			out.push('_');
			out.push(ch.to_ascii_lowercase());
		} else {
			out.push(ch);
		}
	}
	out
}

/// Remove each underscore immediately followed by an ASCII lowercase letter
/// and uppercase that letter.
///
/// Underscores without a lowercase follower (trailing, doubled, before a
/// digit or non-ASCII character) are left in place.
pub fn to_camel_case(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut chars = input.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch == '_' {
			if let Some(&next) = chars.peek() {
				if next.is_ascii_lowercase() {
					out.push(next.to_ascii_uppercase());
					chars.next();
					continue;
				}
			}
		}
		out.push(ch);
	}
	out
}

/// Apply `direction` to one string token.
pub fn convert_case(input: &str, direction: Direction) -> String {
	match direction {
		Direction::Snake => to_snake_case(input),
		Direction::Camel => to_camel_case(input),
		Direction::None => input.to_owned(),
	}
}
