//! Declarative column schema for the raw games table.
//!
//! The pipeline never infers roles at runtime: every source column it
//! consumes is named here, and raw columns outside these lists are ignored.
//! The array orders below are load-bearing: they fix the feature table's
//! column order across runs.

use std::fmt;

/// Primary identifier column of the raw table.
pub const ID_COLUMN: &str = "AppID";

/// Display fields copied into the catalog for picker UIs.
pub const DISPLAY_COLUMNS: [&str; 7] = [
    "Name",
    "Price",
    "Metacritic score",
    "User score",
    "Positive",
    "Negative",
    "Genres",
];

/// Numeric and boolean feature columns, in output order.
///
/// The three platform flags close the list and coerce to booleans;
/// everything before them coerces to floats.
pub const NUMERIC_BOOL_COLUMNS: [&str; 18] = [
    "Price",
    "User score",
    "Metacritic score",
    "Positive",
    "Negative",
    "Peak CCU",
    "Achievements",
    "DLC count",
    "Average playtime forever",
    "Average playtime two weeks",
    "Median playtime forever",
    "Median playtime two weeks",
    "Recommendations",
    "Required age",
    "Score rank",
    "Windows",
    "Mac",
    "Linux",
];

/// Platform support flags: the only features where a missing value resolves
/// to a concrete default (`false`) instead of the missing sentinel.
pub const PLATFORM_FLAG_COLUMNS: [&str; 3] = ["Windows", "Mac", "Linux"];

/// Source column for the engineered `release_year` feature.
pub const RELEASE_DATE_COLUMN: &str = "Release date";

/// Source column for the engineered owners-range features.
pub const OWNERS_COLUMN: &str = "Estimated owners";

/// Engineered output columns, in output order.
pub const ENGINEERED_COLUMNS: [&str; 4] =
    ["release_year", "owners_low", "owners_high", "owners_mid"];

/// Multi-valued categorical columns, in output order.
pub const CATEGORICAL_COLUMNS: [&str; 5] =
    ["Developers", "Publishers", "Categories", "Genres", "Tags"];

pub fn is_platform_flag(column: &str) -> bool {
    PLATFORM_FLAG_COLUMNS.contains(&column)
}

/// The role a declared source column plays in the pipeline.
///
/// A column can hold several roles at once (`Price` is both a display field
/// and a numeric feature); [`role_of`] reports the feature-facing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnRole {
    Identifier,
    Numeric,
    PlatformFlag,
    Engineered,
    Categorical,
    Display,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Identifier => "identifier",
            ColumnRole::Numeric => "numeric",
            ColumnRole::PlatformFlag => "platform flag",
            ColumnRole::Engineered => "engineered",
            ColumnRole::Categorical => "categorical",
            ColumnRole::Display => "display",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the feature-facing role of a raw source column.
///
/// Returns `None` for columns the pipeline ignores.
pub fn role_of(column: &str) -> Option<ColumnRole> {
    if column == ID_COLUMN {
        Some(ColumnRole::Identifier)
    } else if is_platform_flag(column) {
        Some(ColumnRole::PlatformFlag)
    } else if NUMERIC_BOOL_COLUMNS.contains(&column) {
        Some(ColumnRole::Numeric)
    } else if column == RELEASE_DATE_COLUMN || column == OWNERS_COLUMN {
        Some(ColumnRole::Engineered)
    } else if CATEGORICAL_COLUMNS.contains(&column) {
        Some(ColumnRole::Categorical)
    } else if DISPLAY_COLUMNS.contains(&column) {
        Some(ColumnRole::Display)
    } else {
        None
    }
}
