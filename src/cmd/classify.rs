use std::path::PathBuf;

use serde::Serialize;

use plainkit::plain::{Result, is_plain_object, is_plain_value};

use crate::cmd::util::read_value;

#[derive(Serialize)]
struct ClassifyReport {
	kind: &'static str,
	plain_value: bool,
	plain_object: bool,
}

/// Classify a JSON document and print the verdicts.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let value = read_value(&path)?;
	let report = ClassifyReport {
		kind: value.kind(),
		plain_value: is_plain_value(&value),
		plain_object: is_plain_object(&value),
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("kind: {}", report.kind);
	println!("plain_value: {}", report.plain_value);
	println!("plain_object: {}", report.plain_object);
	Ok(())
}
