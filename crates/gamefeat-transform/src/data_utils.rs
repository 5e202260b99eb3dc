//! Frame access helpers shared by the catalog builder and the assembler.

use polars::prelude::{AnyValue, DataFrame};

use gamefeat_ingest::any_to_string;
use gamefeat_model::{AppId, schema};

use crate::error::{Result, TransformError};

/// Cell accessor that treats absent columns and failed lookups as null.
pub fn cell_value<'a>(df: &'a DataFrame, name: &str, idx: usize) -> AnyValue<'a> {
    match df.column(name) {
        Ok(column) => column.get(idx).unwrap_or(AnyValue::Null),
        Err(_) => AnyValue::Null,
    }
}

/// Derive the identifier of every row, in source order.
///
/// Both canonical artifacts key off this one derivation, which is what
/// guarantees they share a key space. Errors when the identifier column is
/// absent.
pub fn identifier_values(df: &DataFrame) -> Result<Vec<AppId>> {
    let column = df
        .column(schema::ID_COLUMN)
        .map_err(|_| TransformError::MissingIdColumn {
            column: schema::ID_COLUMN.to_string(),
        })?;
    let mut ids = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        ids.push(AppId::new(any_to_string(&value)));
    }
    Ok(ids)
}
