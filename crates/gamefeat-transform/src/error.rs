use thiserror::Error;

/// Failures from catalog construction and feature assembly.
///
/// A payload without the primary identifier column cannot be keyed and is
/// the only condition that errors here; every field-level oddity degrades
/// to a sentinel instead.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("identifier column {column:?} missing from raw table")]
    MissingIdColumn { column: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
