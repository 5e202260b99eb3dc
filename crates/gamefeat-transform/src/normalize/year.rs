//! Release-year extraction from loosely formatted date fields.

use chrono::{Datelike, NaiveDate};

/// Date formats tried by the best-effort fallback parse.
const DATE_FORMATS: [&str; 8] = [
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Extract a plausible release year from a raw date cell.
///
/// A four-digit run starting `19` or `20` wins outright, so ambiguous or
/// locale-odd formats still yield a year. Otherwise a best-effort parse
/// over common formats supplies the year component. Returns `None` when
/// neither applies; never errors.
pub fn extract_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(year) = find_year_run(trimmed) {
        return Some(year);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.year())
}

/// Find the leftmost window of four ASCII digits starting `19` or `20`.
fn find_year_run(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    if bytes.len() < 4 {
        return None;
    }
    for window in bytes.windows(4) {
        if window.iter().all(u8::is_ascii_digit)
            && (window.starts_with(b"19") || window.starts_with(b"20"))
        {
            let digits = std::str::from_utf8(window).ok()?;
            return digits.parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_name_format() {
        assert_eq!(extract_year("Oct 21, 2008"), Some(2008));
    }

    #[test]
    fn bare_year() {
        assert_eq!(extract_year("2015"), Some(2015));
    }

    #[test]
    fn year_run_wins_over_format_parse() {
        // The run rule fires before any format is tried.
        assert_eq!(extract_year("21/10/2008"), Some(2008));
        assert_eq!(extract_year("coming 1999"), Some(1999));
    }

    #[test]
    fn fallback_parse_handles_two_digit_years() {
        assert_eq!(extract_year("10/21/08"), Some(2008));
    }

    #[test]
    fn non_dates_yield_none() {
        assert_eq!(extract_year("not a date"), None);
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("   "), None);
    }

    #[test]
    fn century_bound_is_respected() {
        // 2108 has no 19/20 run; the format parse picks it up.
        assert_eq!(extract_year("Oct 21, 2108"), Some(2108));
        assert_eq!(extract_year("1776"), None);
    }
}
