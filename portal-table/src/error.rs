//! Error types for the table pipeline.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors surfaced by the table layer.
///
/// Filtering, sorting and pagination never fail; messy data degrades to
/// string comparison instead. Only export can fail.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file sink rejected the export.
    #[error("export of {filename} failed: {source}")]
    Export {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV writer rejected a record.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
