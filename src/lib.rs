//! Utilities for JSON-shaped payload values: deciding whether data is
//! "plain" (serializable without surprises), rewriting key casing between
//! camelCase and snake_case, promoting date-suffixed string fields to real
//! instants, and phrasing second counts for display.

/// Value model, classifiers, converters, and supporting types.
pub mod plain;
