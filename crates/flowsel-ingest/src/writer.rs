//! CSV file writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{IngestError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Write a table as UTF-8, comma-separated CSV with a header row.
///
/// Data goes to a temporary file next to `path` and is renamed into place,
/// so a failure never leaves a partial file at `path`.
pub fn write_csv_table(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut frame = df.clone();
    CsvWriter::new(tmp.as_file_mut())
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tmp.as_file_mut()
        .flush()
        .map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    tmp.persist(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote table"
    );
    Ok(())
}
