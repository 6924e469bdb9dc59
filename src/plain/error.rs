use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PlainError>;

/// Errors produced while formatting durations and driving the CLI surface.
///
/// The classifiers and object converters are total functions and never
/// construct these; a failed date parse inside a conversion degrades to a
/// null value instead of propagating.
#[derive(Debug, Error)]
pub enum PlainError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Duration input was negative.
	#[error("duration seconds must be non-negative, got {seconds}")]
	NegativeDuration {
		/// Offending second count.
		seconds: i64,
	},
	/// Case-conversion direction token was not recognised.
	#[error("invalid direction: {value} (expected snake, camel, or none)")]
	InvalidDirection {
		/// User-provided direction string.
		value: String,
	},
}
