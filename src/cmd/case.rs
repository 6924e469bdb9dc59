use plainkit::plain::{Direction, Result, convert_case};

/// Convert one token's casing and print the result.
pub fn run(input: String, direction: String) -> Result<()> {
	let direction: Direction = direction.parse()?;
	println!("{}", convert_case(&input, direction));
	Ok(())
}
