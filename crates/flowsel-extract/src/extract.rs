//! Catalog-driven extraction of a single study.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use flowsel_catalog::{Catalog, DatasetEntry};
use flowsel_ingest::{read_csv_table, write_csv_table};

use crate::error::Result;
use crate::projection::project;

/// A study's columns taken from its dataset.
#[derive(Debug, Clone)]
pub struct Projection {
    pub dataset: &'static str,
    pub study: &'static str,
    pub citation: &'static str,
    pub frame: DataFrame,
}

impl Projection {
    pub fn rows(&self) -> usize {
        self.frame.height()
    }

    pub fn columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}

/// A projection persisted as CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProjection {
    pub dataset: &'static str,
    pub study: &'static str,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Make `path` absolute against the current directory, leaving it as is if
/// that is not possible.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Absolute location of a dataset's source CSV under `root_dir`.
pub fn resolve_source(dataset: &DatasetEntry, root_dir: &Path) -> PathBuf {
    absolute_path(&root_dir.join(dataset.source_path()))
}

/// Extract one study's columns from its dataset.
///
/// # Errors
///
/// Unknown dataset or study, a missing or unparsable source file, and a
/// source table lacking any required column are all fatal.
pub fn extract(
    catalog: &Catalog,
    dataset_id: &str,
    study_id: &str,
    root_dir: &Path,
) -> Result<Projection> {
    let span = info_span!("extract", dataset = %dataset_id, study = %study_id);
    let _guard = span.enter();

    let (dataset, study) = catalog.study(dataset_id, study_id)?;
    let source = resolve_source(dataset, root_dir);
    debug!(source = %source.display(), "resolved source");

    let table = read_csv_table(&source)?;
    let frame = project(&table, study.columns)?;
    info!(
        rows = frame.height(),
        columns = frame.width(),
        "extracted feature subset"
    );

    Ok(Projection {
        dataset: dataset.id,
        study: study.id,
        citation: study.citation,
        frame,
    })
}

/// Write a projection to `path` as CSV.
pub fn save_projection(projection: &Projection, path: &Path) -> Result<SavedProjection> {
    let path = absolute_path(path);
    write_csv_table(&projection.frame, &path)?;
    Ok(SavedProjection {
        dataset: projection.dataset,
        study: projection.study,
        path,
        rows: projection.frame.height(),
        columns: projection.frame.width(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_resolved_under_root() {
        let dataset = Catalog::builtin().dataset("unsw-nb15").unwrap();
        let source = resolve_source(dataset, Path::new("/srv/flows"));
        assert_eq!(
            source,
            PathBuf::from("/srv/flows/Data/UNSW-NB15/UNSW-NB15_trainset.csv")
        );
    }

    #[test]
    fn relative_root_becomes_absolute() {
        let dataset = Catalog::builtin().dataset("vpn-nonvpn").unwrap();
        let source = resolve_source(dataset, Path::new("."));
        assert!(source.is_absolute());
        assert!(source.ends_with("Data/VPN-nonVPN/VPN-nonVPN_train_features.csv"));
    }
}
