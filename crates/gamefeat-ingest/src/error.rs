use std::path::PathBuf;

use thiserror::Error;

/// Failures while fetching the raw table.
///
/// This is the one loud edge of the pipeline: without a row source there is
/// nothing to normalize, so load problems abort the whole load cycle.
/// Field-level oddities inside a loaded table never reach this type.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("frame error: {0}")]
    Frame(#[from] polars::error::PolarsError),
    #[error("no header row in {}", path.display())]
    MissingHeader { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
