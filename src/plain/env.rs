/// Host-environment feature probe, injected so the core never inspects
/// ambient globals directly.
pub trait EnvironmentProbe {
	/// Whether the host exposes a window global.
	fn has_window(&self) -> bool;
	/// Whether the window exposes a document.
	fn has_document(&self) -> bool;
}

/// True when the probed host looks like a browser: a window with a document.
pub fn is_in_browser(probe: &impl EnvironmentProbe) -> bool {
	probe.has_window() && probe.has_document()
}

/// Probe for an ordinary native process host; reports no browser features.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl EnvironmentProbe for NativeHost {
	fn has_window(&self) -> bool {
		false
	}

	fn has_document(&self) -> bool {
		false
	}
}
