//! Extraction of every study of a dataset into one CSV per study.

use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use flowsel_catalog::Catalog;
use flowsel_ingest::IngestError;

use crate::error::Result;
use crate::extract::{SavedProjection, absolute_path, extract, save_projection};

/// Default batch output directory, relative to the root.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// File name for one study's output: `{dataset}_{study}.csv`.
pub fn output_file_name(dataset_id: &str, study_id: &str) -> String {
    format!("{dataset_id}_{study_id}.csv")
}

/// Batch output directory: `output_dir` under `root_dir`, or
/// [`DEFAULT_OUTPUT_DIR`] when unset. An absolute `output_dir` is used as is.
pub fn batch_output_dir(root_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR));
    absolute_path(&root_dir.join(dir))
}

/// Extract and save every study of `dataset_id`, in catalog order.
///
/// Stops at the first failure. Files saved before the failure stay on disk.
pub fn extract_all(
    catalog: &Catalog,
    dataset_id: &str,
    root_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<SavedProjection>> {
    extract_all_with(catalog, dataset_id, root_dir, output_dir, |_| {})
}

/// [`extract_all`], calling `on_saved` as each file lands.
pub fn extract_all_with<F>(
    catalog: &Catalog,
    dataset_id: &str,
    root_dir: &Path,
    output_dir: &Path,
    mut on_saved: F,
) -> Result<Vec<SavedProjection>>
where
    F: FnMut(&SavedProjection),
{
    let span = info_span!("batch", dataset = %dataset_id, output_dir = %output_dir.display());
    let _guard = span.enter();

    let dataset = catalog.dataset(dataset_id)?;
    std::fs::create_dir_all(output_dir).map_err(|e| IngestError::FileWrite {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut saved = Vec::with_capacity(dataset.studies.len());
    for study in dataset.studies() {
        let projection = extract(catalog, dataset.id, study.id, root_dir)?;
        let path = output_dir.join(output_file_name(dataset.id, study.id));
        let entry = save_projection(&projection, &path)?;
        on_saved(&entry);
        saved.push(entry);
    }
    info!(files = saved.len(), "batch complete");
    Ok(saved)
}
