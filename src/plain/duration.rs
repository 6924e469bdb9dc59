use crate::plain::{PlainError, Result};

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// Seconds in one 365-day year. No calendar or leap adjustment.
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Descending unit ladder below the year, walked first-fit.
const LADDER: [(i64, &str); 3] = [(SECONDS_PER_DAY, "day"), (SECONDS_PER_HOUR, "hour"), (SECONDS_PER_MINUTE, "minute")];

/// Phrase a non-negative second count for display.
///
/// Durations of three years or more collapse into the coarse buckets
/// `"3 years and more"` and `"10 years and more"`. Below that, years report
/// with their remaining whole days (`"2 years and 3 days"`) and everything
/// shorter reports the single largest fitting unit (`"1 hour"`, never
/// `"1 hour and 3 minutes"`). Zero is `"0 seconds"`.
pub fn seconds_to_human_readable(seconds: i64) -> Result<String> {
	if seconds < 0 {
		return Err(PlainError::NegativeDuration { seconds });
	}

	if seconds >= 10 * SECONDS_PER_YEAR {
		return Ok("10 years and more".to_owned());
	}
	if seconds >= 3 * SECONDS_PER_YEAR {
		return Ok("3 years and more".to_owned());
	}

	if seconds >= SECONDS_PER_YEAR {
		let years = seconds / SECONDS_PER_YEAR;
		let days = (seconds % SECONDS_PER_YEAR) / SECONDS_PER_DAY;
		if days > 0 {
			return Ok(format!("{} and {}", unit_phrase(years, "year"), unit_phrase(days, "day")));
		}
		return Ok(unit_phrase(years, "year"));
	}

	for (unit_seconds, unit_name) in LADDER {
		if seconds >= unit_seconds {
			return Ok(unit_phrase(seconds / unit_seconds, unit_name));
		}
	}

	Ok(unit_phrase(seconds, "second"))
}

/// `"1 unit"` when count is exactly one, `"N units"` otherwise (including zero).
fn unit_phrase(count: i64, unit: &str) -> String {
	if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}
