//! Error types for feature subset extraction.

use thiserror::Error;

use flowsel_catalog::CatalogError;
use flowsel_ingest::IngestError;

/// Errors that can occur while extracting a study's columns.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Dataset or study lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Loading or writing a table failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The source table lacks required columns. Lists all of them.
    #[error("Missing columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ExtractError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
