//! Feature table assembly.
//!
//! Builds independent keyed column groups first (numeric/boolean,
//! engineered, categorical), then performs one aligned merge into the
//! fixed column order. Ordering is recomputed from the declared schema at
//! the end, so construction order can never leak into the output.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info, warn};

use gamefeat_ingest::{any_to_bool, any_to_f64, any_to_string_non_empty};
use gamefeat_model::{FeatureRow, FeatureTable, FeatureValue, schema};

use crate::data_utils::identifier_values;
use crate::error::Result;
use crate::normalize::{extract_year, feature_name, parse_list, parse_owner_range};

/// One keyed column group: output name plus one value per source row.
struct ColumnPart {
    name: String,
    values: Vec<FeatureValue>,
}

/// Assemble the feature table from the raw table.
///
/// Declared columns absent from the raw schema are omitted, never filled
/// with placeholders; when no declared column is present at all the result
/// is an empty table. Rows sharing an identifier overwrite in place (last
/// row wins), mirroring the catalog builder.
pub fn assemble_features(df: &DataFrame) -> Result<FeatureTable> {
    let ids = identifier_values(df)?;

    let mut parts = numeric_bool_parts(df);
    if let Some(part) = release_year_part(df) {
        parts.push(part);
    }
    parts.extend(owners_parts(df));
    parts.extend(categorical_parts(df));

    if parts.is_empty() {
        debug!("no declared columns present, emitting empty feature table");
        return Ok(FeatureTable::default());
    }

    let mut table = FeatureTable::new(ordered_columns(&parts));
    for (row_idx, id) in ids.into_iter().enumerate() {
        let mut row = FeatureRow::new(id.clone());
        for part in &parts {
            row.cells
                .insert(part.name.clone(), part.values[row_idx].clone());
        }
        if table.insert(row) {
            warn!(id = %id, "duplicate identifier in raw table, keeping last row");
        }
    }

    info!(
        rows = table.len(),
        columns = table.columns().len(),
        "feature table assembled"
    );
    Ok(table)
}

fn column_cell<'a>(column: &'a Column, idx: usize) -> AnyValue<'a> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

/// String cells only; typed cells read as absent. The range parser wants
/// actual range text, not the textual form of a stray number.
fn string_cell(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::String(s) => Some((*s).to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Numeric and boolean features, in declared order. Numerics coerce to
/// floats with unparseable cells going to the missing sentinel, never
/// zero; platform flags default missing to `false` instead.
fn numeric_bool_parts(df: &DataFrame) -> Vec<ColumnPart> {
    let mut parts = Vec::new();
    for column in schema::NUMERIC_BOOL_COLUMNS {
        let Ok(source) = df.column(column) else {
            continue;
        };
        let values = (0..df.height())
            .map(|idx| {
                let value = column_cell(source, idx);
                if schema::is_platform_flag(column) {
                    FeatureValue::Bool(any_to_bool(&value).unwrap_or(false))
                } else {
                    FeatureValue::from_opt_f64(any_to_f64(&value))
                }
            })
            .collect();
        parts.push(ColumnPart {
            name: feature_name(column),
            values,
        });
    }
    parts
}

fn release_year_part(df: &DataFrame) -> Option<ColumnPart> {
    let source = df.column(schema::RELEASE_DATE_COLUMN).ok()?;
    let values = (0..df.height())
        .map(|idx| {
            let year = any_to_string_non_empty(&column_cell(source, idx))
                .and_then(|text| extract_year(&text));
            FeatureValue::from_opt_i64(year.map(i64::from))
        })
        .collect();
    Some(ColumnPart {
        name: "release_year".to_string(),
        values,
    })
}

fn owners_parts(df: &DataFrame) -> Vec<ColumnPart> {
    let Ok(source) = df.column(schema::OWNERS_COLUMN) else {
        return Vec::new();
    };
    let mut low = Vec::with_capacity(df.height());
    let mut high = Vec::with_capacity(df.height());
    let mut mid = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let range = string_cell(&column_cell(source, idx))
            .and_then(|text| parse_owner_range(&text));
        low.push(FeatureValue::from_opt_i64(range.map(|r| r.0)));
        high.push(FeatureValue::from_opt_i64(range.map(|r| r.1)));
        mid.push(FeatureValue::from_opt_i64(range.map(|r| r.2)));
    }
    vec![
        ColumnPart {
            name: "owners_low".to_string(),
            values: low,
        },
        ColumnPart {
            name: "owners_high".to_string(),
            values: high,
        },
        ColumnPart {
            name: "owners_mid".to_string(),
            values: mid,
        },
    ]
}

fn categorical_parts(df: &DataFrame) -> Vec<ColumnPart> {
    let mut parts = Vec::new();
    for column in schema::CATEGORICAL_COLUMNS {
        let Ok(source) = df.column(column) else {
            continue;
        };
        let values = (0..df.height())
            .map(|idx| FeatureValue::from_opt_list(parse_list(&column_cell(source, idx))))
            .collect();
        parts.push(ColumnPart {
            name: feature_name(column),
            values,
        });
    }
    parts
}

/// Fixed output order: declared numeric/boolean columns, engineered
/// columns, then categorical columns, each filtered to what was built.
fn ordered_columns(parts: &[ColumnPart]) -> Vec<String> {
    let present: BTreeSet<&str> = parts.iter().map(|part| part.name.as_str()).collect();
    let mut ordered = Vec::with_capacity(parts.len());
    for column in schema::NUMERIC_BOOL_COLUMNS {
        push_if_present(&mut ordered, &present, feature_name(column));
    }
    for column in schema::ENGINEERED_COLUMNS {
        push_if_present(&mut ordered, &present, column.to_string());
    }
    for column in schema::CATEGORICAL_COLUMNS {
        push_if_present(&mut ordered, &present, feature_name(column));
    }
    ordered
}

fn push_if_present(ordered: &mut Vec<String>, present: &BTreeSet<&str>, name: String) {
    if present.contains(name.as_str()) {
        ordered.push(name);
    }
}
