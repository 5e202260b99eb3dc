//! Load-and-build pipeline shared by the CLI commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use gamefeat_ingest::load_raw_frame;
use gamefeat_model::{Catalog, FeatureTable};
use gamefeat_transform::{assemble_features, build_catalog};

/// The canonical artifact pair for one load cycle.
///
/// Built once per load and read-only afterwards; a reload builds a fresh
/// pair and swaps it in wholesale rather than mutating this one.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub catalog: Catalog,
    pub features: FeatureTable,
}

/// Run the bulk fetch and both builders over one CSV export.
///
/// The load is the only step allowed to fail; downstream normalization is
/// total over whatever the frame contains.
pub fn build_artifacts(csv: &Path) -> Result<Artifacts> {
    let load_span = info_span!("load", csv = %csv.display());
    let _load_guard = load_span.enter();

    let load_start = Instant::now();
    let df = load_raw_frame(csv).with_context(|| format!("load {}", csv.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = load_start.elapsed().as_millis(),
        "raw table loaded"
    );

    let build_start = Instant::now();
    let catalog = build_catalog(&df).context("build catalog")?;
    let features = assemble_features(&df).context("assemble feature table")?;
    info!(
        entries = catalog.len(),
        feature_rows = features.len(),
        feature_columns = features.columns().len(),
        duration_ms = build_start.elapsed().as_millis(),
        "artifacts built"
    );

    Ok(Artifacts { catalog, features })
}
