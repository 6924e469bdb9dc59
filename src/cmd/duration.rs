use plainkit::plain::{Result, seconds_to_human_readable};

/// Print the human-readable phrase for a second count.
pub fn run(seconds: i64) -> Result<()> {
	println!("{}", seconds_to_human_readable(seconds)?);
	Ok(())
}
