mod case;
mod classify;
mod convert;
mod duration;
mod env;
mod error;
mod json;
mod value;

/// Case-conversion primitives and direction selector.
pub use case::{Direction, convert_case, to_camel_case, to_snake_case};
/// Plain-value and plain-object classifiers.
pub use classify::{is_plain_object, is_plain_value};
/// Object key-case conversion and date promotion.
pub use convert::{camel_to_snake, convert_object, ends_with_at_to_date, parse_date, snake_to_camel};
/// Duration phrasing entry point and unit constants.
pub use duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR, seconds_to_human_readable};
/// Host-environment probe seam.
pub use env::{EnvironmentProbe, NativeHost, is_in_browser};
/// Error and result aliases.
pub use error::{PlainError, Result};
/// JSON interop for the value model.
pub use json::{from_json, to_json};
/// Runtime value model types.
pub use value::{ArrayRef, MapEntry, MapRef, Value};
