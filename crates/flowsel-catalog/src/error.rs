//! Error types for catalog lookups.

use thiserror::Error;

/// Errors raised when resolving a dataset or study identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The dataset identifier is not in the catalog.
    #[error("Unknown dataset {dataset}")]
    UnknownDataset { dataset: String },

    /// The dataset exists but has no study with this identifier.
    #[error("Unknown study {study} for dataset {dataset}")]
    UnknownStudy { dataset: String, study: String },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
