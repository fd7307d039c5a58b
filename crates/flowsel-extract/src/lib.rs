//! Feature subset extraction.
//!
//! Resolves a (dataset, study) pair in the catalog, loads the dataset's CSV
//! from a project root, checks that every column the study needs is present
//! and returns a new table holding exactly those columns in the study's
//! order. Batch mode writes one CSV per study of a dataset.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use flowsel_catalog::Catalog;
//! use flowsel_extract::{extract, save_projection};
//!
//! let projection = extract(Catalog::builtin(), "cic-ids", "anderson2016", Path::new("."))?;
//! save_projection(&projection, Path::new("anderson2016.csv"))?;
//! ```

mod batch;
mod error;
mod extract;
mod projection;

pub use batch::{
    DEFAULT_OUTPUT_DIR, batch_output_dir, extract_all, extract_all_with, output_file_name,
};
pub use error::{ExtractError, Result};
pub use extract::{
    Projection, SavedProjection, absolute_path, extract, resolve_source, save_projection,
};
pub use projection::{missing_columns, project, validate_columns};
