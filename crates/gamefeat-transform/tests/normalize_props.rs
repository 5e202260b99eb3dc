//! Property tests for the scalar normalizers.
//!
//! The pipeline's contract is total, panic-free normalization over
//! arbitrary input; these checks hold that line.

use proptest::prelude::*;

use gamefeat_transform::normalize::{extract_year, feature_name, parse_list_str, parse_owner_range};

proptest! {
    #[test]
    fn feature_name_is_idempotent(input in ".*") {
        let once = feature_name(&input);
        let twice = feature_name(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn feature_name_emits_clean_snake_case(input in ".*") {
        let name = feature_name(&input);
        prop_assert!(!name.starts_with('_'));
        prop_assert!(!name.ends_with('_'));
        prop_assert!(
            name.chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
        );
    }

    #[test]
    fn range_parser_is_total(input in ".*") {
        if let Some((low, high, mid)) = parse_owner_range(&input) {
            // mid is the floor average of the parsed bounds.
            prop_assert_eq!(mid, (low + high) / 2);
        }
    }

    #[test]
    fn year_extractor_is_total(input in ".*") {
        let _ = extract_year(&input);
    }

    #[test]
    fn list_parser_pieces_are_trimmed_and_non_empty(input in ".*") {
        // JSON-array inputs may legitimately carry empty or padded items;
        // the trim/drop guarantee applies to the text rules.
        if !input.trim_start().starts_with('[') {
            for piece in parse_list_str(&input) {
                prop_assert!(!piece.is_empty());
                prop_assert_eq!(piece.trim().len(), piece.len());
            }
        }
    }
}
