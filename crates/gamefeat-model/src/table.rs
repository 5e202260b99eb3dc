//! The assembled feature table and its read-only query surface.
//!
//! Rows keep the raw table's order, columns follow one fixed sequence shared
//! by every row, and an id index backs point lookups. After assembly the
//! table is never mutated; a reload builds a fresh table and swaps it in.

use std::collections::BTreeMap;

use crate::{AppId, FeatureValue};

static MISSING: FeatureValue = FeatureValue::Missing;

/// One fully coerced record, keyed by [`AppId`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureRow {
    pub id: AppId,
    pub cells: BTreeMap<String, FeatureValue>,
}

impl FeatureRow {
    pub fn new(id: AppId) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    /// Cell accessor that treats an absent column as the missing sentinel.
    pub fn get(&self, column: &str) -> &FeatureValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }
}

/// The model-facing artifact: a 2D structure with [`AppId`] row keys and a
/// fixed column order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<FeatureRow>,
    index: BTreeMap<AppId, usize>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &AppId> {
        self.index.keys()
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &AppId) -> Option<&FeatureRow> {
        self.index.get(id).map(|&idx| &self.rows[idx])
    }

    /// Insert a row, replacing any previous row under the same id in place.
    /// Returns `true` when an existing row was overwritten.
    pub fn insert(&mut self, row: FeatureRow) -> bool {
        match self.index.get(&row.id) {
            Some(&idx) => {
                self.rows[idx] = row;
                true
            }
            None => {
                self.index.insert(row.id.clone(), self.rows.len());
                self.rows.push(row);
                false
            }
        }
    }

    /// Look up the rows for the requested identifiers.
    ///
    /// The output preserves the request order, not the table's internal
    /// order, and unknown identifiers are dropped silently. Callers that
    /// need to know about misses diff the result against their input.
    pub fn select(&self, ids: &[AppId]) -> Vec<&FeatureRow> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}
