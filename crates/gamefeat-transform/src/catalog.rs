//! Canonical dataset construction.
//!
//! Builds the UI-facing catalog: one entry per identifier, display fields
//! only. Scalars copy through with coercion, `Genres` runs through the
//! list parser, and everything missing stays `None`.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use gamefeat_ingest::{any_to_f64, any_to_i64, any_to_string_non_empty};
use gamefeat_model::{CanonicalEntry, Catalog};

use crate::data_utils::{cell_value, identifier_values};
use crate::error::Result;
use crate::normalize::parse_list;

/// Build the identifier -> entry catalog from the raw table.
///
/// Rows sharing an identifier overwrite the prior entry (last row wins);
/// that is policy, not an error, since duplicate ids are unexpected but
/// must not sink the load.
pub fn build_catalog(df: &DataFrame) -> Result<Catalog> {
    let ids = identifier_values(df)?;
    let mut catalog = Catalog::default();
    for (idx, id) in ids.into_iter().enumerate() {
        let entry = CanonicalEntry {
            name: any_to_string_non_empty(&cell_value(df, "Name", idx)),
            price: any_to_f64(&cell_value(df, "Price", idx)),
            metacritic_score: any_to_f64(&cell_value(df, "Metacritic score", idx)),
            user_score: any_to_f64(&cell_value(df, "User score", idx)),
            positive: any_to_i64(&cell_value(df, "Positive", idx)),
            negative: any_to_i64(&cell_value(df, "Negative", idx)),
            genres: parse_list(&cell_value(df, "Genres", idx)),
        };
        if catalog.insert(id.clone(), entry) {
            warn!(id = %id, "duplicate identifier in raw table, keeping last row");
        }
    }
    debug!(entries = catalog.len(), "catalog built");
    Ok(catalog)
}
