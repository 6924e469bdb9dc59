use plainkit::plain::{EnvironmentProbe, NativeHost, Result, is_in_browser};

/// Report the native host's environment features and the browser verdict.
pub fn run() -> Result<()> {
	let probe = NativeHost;

	println!("window: {}", probe.has_window());
	println!("document: {}", probe.has_document());
	println!("browser: {}", is_in_browser(&probe));
	Ok(())
}
