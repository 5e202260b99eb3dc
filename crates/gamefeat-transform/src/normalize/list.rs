//! List-ish field parsing.
//!
//! Source cells encode lists three ways: JSON-array syntax, comma
//! separation, or a single bare token. The parser reduces all of them to
//! one canonical shape and never errors; a surprising input degrades to
//! the most specific rule that still matches.

use polars::prelude::AnyValue;

use gamefeat_ingest::any_to_string;

/// Parse a raw cell that may encode a list.
///
/// Nulls stay null, native list cells pass through, strings run through
/// [`parse_list_str`], and any other scalar becomes a singleton of its
/// string form.
pub fn parse_list(value: &AnyValue<'_>) -> Option<Vec<String>> {
    match value {
        AnyValue::Null => None,
        AnyValue::List(series) => {
            let mut items = Vec::with_capacity(series.len());
            for idx in 0..series.len() {
                let item = series.get(idx).unwrap_or(AnyValue::Null);
                items.push(any_to_string(&item));
            }
            Some(items)
        }
        AnyValue::String(s) => Some(parse_list_str(s)),
        AnyValue::StringOwned(s) => Some(parse_list_str(s)),
        other => Some(vec![any_to_string(other)]),
    }
}

/// Parse the string form of a list-ish field.
///
/// First matching rule wins: a JSON array of strings, a comma-separated
/// list (pieces trimmed, empties dropped), a bare token, or empty input
/// yielding an empty list.
pub fn parse_list_str(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return items;
        }
        // Malformed JSON falls through to the text rules.
    }
    if trimmed.contains(',') {
        return trimmed
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(ToString::to_string)
            .collect();
    }
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_stays_null() {
        assert_eq!(parse_list(&AnyValue::Null), None);
    }

    #[test]
    fn json_array_parses() {
        assert_eq!(
            parse_list_str(r#"["Action","Indie"]"#),
            vec!["Action", "Indie"]
        );
    }

    #[test]
    fn malformed_json_falls_through_to_comma_split() {
        assert_eq!(parse_list_str(r#"["Action", Indie]"#), vec!["[\"Action\"", "Indie]"]);
    }

    #[test]
    fn comma_split_trims_and_drops_empty_pieces() {
        assert_eq!(parse_list_str("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(parse_list_str("A,,B"), vec!["A", "B"]);
        assert_eq!(parse_list_str(",,"), Vec::<String>::new());
    }

    #[test]
    fn bare_token_becomes_singleton() {
        assert_eq!(parse_list_str("solo"), vec!["solo"]);
    }

    #[test]
    fn empty_string_becomes_empty_list() {
        assert_eq!(parse_list_str(""), Vec::<String>::new());
        assert_eq!(parse_list_str("   "), Vec::<String>::new());
    }

    #[test]
    fn other_scalars_become_string_singletons() {
        assert_eq!(parse_list(&AnyValue::Int64(7)), Some(vec!["7".to_string()]));
        assert_eq!(
            parse_list(&AnyValue::Boolean(true)),
            Some(vec!["True".to_string()])
        );
    }
}
