//! Catalog of network-flow datasets and the feature subsets used in
//! published studies.
//!
//! The catalog is compiled in and read-only. Each dataset names a source CSV
//! (relative to a project root) and a set of studies; each study carries a
//! citation and the ordered list of columns it uses.
//!
//! # Example
//!
//! ```
//! use flowsel_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let (dataset, study) = catalog.study("cic-ids", "anderson2016").unwrap();
//! assert_eq!(dataset.id, "cic-ids");
//! assert_eq!(study.columns[0], "Flow Duration");
//! ```

mod datasets;
mod error;
mod model;
mod registry;

pub use error::{CatalogError, Result};
pub use model::{DatasetEntry, StudyEntry};
pub use registry::Catalog;
