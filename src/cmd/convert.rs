use std::path::PathBuf;

use plainkit::plain::{Direction, Result, convert_object, to_json};

use crate::cmd::util::read_value;

/// Convert a JSON document's keys and print the rewritten document.
pub fn run(path: PathBuf, direction: String, dates: bool) -> Result<()> {
	let direction: Direction = direction.parse()?;
	let value = read_value(&path)?;
	let converted = convert_object(&value, direction, dates);

	println!("{}", serde_json::to_string_pretty(&to_json(&converted))?);
	Ok(())
}
