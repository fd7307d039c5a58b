//! Table I/O for flow feature datasets.
//!
//! Loads CSV files with a header row into Polars DataFrames and writes
//! DataFrames back out as CSV.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use flowsel_ingest::{read_csv_table, write_csv_table};
//!
//! let df = read_csv_table(Path::new("Data/UNSW-NB15/UNSW-NB15_trainset.csv"))?;
//! write_csv_table(&df, Path::new("outputs/copy.csv"))?;
//! ```

mod error;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{ensure_exists, read_csv_table};

// === CSV Writing ===
pub use writer::{ensure_parent_dir, write_csv_table};
