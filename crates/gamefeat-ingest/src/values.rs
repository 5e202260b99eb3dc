//! Coercion helpers over Polars `AnyValue` cells.
//!
//! The raw table may arrive with typed columns (numeric exports) or as
//! all-string columns (CSV). These helpers give both shapes one reading:
//! nulls and unparseable text coerce to `None`, never to an error.

use polars::prelude::AnyValue;

/// String form of a cell. Nulls become the empty string.
pub fn any_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if *b { "True" } else { "False" }.to_string(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format!("{v}"),
        AnyValue::Float64(v) => format!("{v}"),
        other => other.to_string(),
    }
}

/// String form of a cell, with blank results collapsed to `None`.
pub fn any_to_string_non_empty(value: &AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric reading of a cell: typed numerics pass through, strings are
/// parsed, everything else is `None`.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Integer reading of a cell. Floats truncate; non-numeric text is `None`.
pub fn any_to_i64(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(*v)),
        AnyValue::Int16(v) => Some(i64::from(*v)),
        AnyValue::Int32(v) => Some(i64::from(*v)),
        AnyValue::Int64(v) => Some(*v),
        AnyValue::UInt8(v) => Some(i64::from(*v)),
        AnyValue::UInt16(v) => Some(i64::from(*v)),
        AnyValue::UInt32(v) => Some(i64::from(*v)),
        AnyValue::UInt64(v) => i64::try_from(*v).ok(),
        AnyValue::Float32(v) => Some(*v as i64),
        AnyValue::Float64(v) => Some(*v as i64),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(s),
        _ => None,
    }
}

/// Boolean reading of a cell. Accepts native booleans, true/false text in
/// any casing, and 0/1 numerics; anything else is `None`.
pub fn any_to_bool(value: &AnyValue<'_>) -> Option<bool> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(*b),
        AnyValue::String(s) => parse_bool(s),
        AnyValue::StringOwned(s) => parse_bool(s),
        _ => match any_to_i64(value) {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
/// Text with a fractional part truncates through the f64 path.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|v| v as i64))
}

/// Parses true/false text in any casing, returning None otherwise.
pub fn parse_bool(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_coercion() {
        assert_eq!(any_to_string(&AnyValue::Null), "");
        assert_eq!(any_to_string(&AnyValue::Int64(440)), "440");
        assert_eq!(any_to_string(&AnyValue::Boolean(true)), "True");
        assert_eq!(any_to_string(&AnyValue::String("Portal")), "Portal");
        assert_eq!(any_to_string_non_empty(&AnyValue::String("  ")), None);
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(any_to_f64(&AnyValue::String("19.99")), Some(19.99));
        assert_eq!(any_to_f64(&AnyValue::Int32(7)), Some(7.0));
        assert_eq!(any_to_f64(&AnyValue::String("N/A")), None);
        assert_eq!(any_to_f64(&AnyValue::Null), None);
        assert_eq!(any_to_i64(&AnyValue::String("12")), Some(12));
        assert_eq!(any_to_i64(&AnyValue::String("12.9")), Some(12));
    }

    #[test]
    fn boolean_coercion() {
        assert_eq!(any_to_bool(&AnyValue::Boolean(true)), Some(true));
        assert_eq!(any_to_bool(&AnyValue::String("True")), Some(true));
        assert_eq!(any_to_bool(&AnyValue::String("FALSE")), Some(false));
        assert_eq!(any_to_bool(&AnyValue::Int64(1)), Some(true));
        assert_eq!(any_to_bool(&AnyValue::String("yes")), None);
        assert_eq!(any_to_bool(&AnyValue::Null), None);
    }
}
