//! CSV loading for the raw games table.
//!
//! The export carries one header row followed by data rows. Cells are kept
//! as strings; blank cells become nulls so that downstream coercion can
//! tell "no value" apart from actual text. Type coercion happens later,
//! against the declared schema, not here.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A raw CSV table: header names plus string cells, `None` for blanks.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a CSV file into a [`RawTable`].
///
/// Short records pad with nulls, long records drop the overflow; fully
/// blank lines are skipped. A file without a header row is malformed input
/// and fails loudly.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).and_then(normalize_cell));
        }
        if row.iter().all(Option::is_none) {
            continue;
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "raw table read"
    );
    Ok(RawTable { headers, rows })
}

/// Build an all-string DataFrame from a [`RawTable`], one nullable column
/// per header.
pub fn table_to_frame(table: &RawTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let values: Vec<Option<String>> = table
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().flatten())
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}

/// Load the raw games table from a CSV file into a DataFrame.
///
/// This is the pipeline's single bulk fetch: any failure here aborts the
/// load cycle, while everything after it degrades per field.
pub fn load_raw_frame(path: &Path) -> Result<DataFrame> {
    let table = read_raw_table(path)?;
    table_to_frame(&table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_become_nulls() {
        let table = RawTable {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![
                vec![Some("1".to_string()), None],
                vec![Some("2".to_string()), Some("x".to_string())],
            ],
        };
        let df = table_to_frame(&table).expect("build frame");
        assert_eq!(df.height(), 2);
        let b = df.column("B").expect("column B");
        assert_eq!(b.null_count(), 1);
    }
}
