use std::path::Path;

use plainkit::plain::{Result, Value, from_json};

/// Read a JSON document from disk and lift it into the value model.
pub(crate) fn read_value(path: &Path) -> Result<Value> {
	let text = std::fs::read_to_string(path)?;
	let document: serde_json::Value = serde_json::from_str(&text)?;
	Ok(from_json(&document))
}
