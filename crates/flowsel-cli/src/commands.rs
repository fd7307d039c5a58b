use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use flowsel_catalog::Catalog;
use flowsel_extract::{SavedProjection, batch_output_dir, extract, extract_all_with, save_projection};

use crate::cli::Invocation;
use crate::summary::{print_preview, print_saved};

/// Run a validated invocation against `catalog`.
pub fn run(catalog: &Catalog, invocation: &Invocation) -> Result<()> {
    match invocation {
        Invocation::List => {
            run_list(catalog);
            Ok(())
        }
        Invocation::Single {
            dataset,
            study,
            root,
            output,
        } => run_single(catalog, dataset, study, root, output.as_deref()),
        Invocation::Batch {
            dataset,
            root,
            output_dir,
        } => run_batch(catalog, dataset, root, output_dir.as_deref()).map(|_| ()),
    }
}

pub fn run_list(catalog: &Catalog) {
    println!("{}", catalog.listing());
}

/// Extract one study; save it when `output` is set, otherwise preview it.
pub fn run_single(
    catalog: &Catalog,
    dataset: &str,
    study: &str,
    root: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let projection = extract(catalog, dataset, study, root)
        .with_context(|| format!("extract {dataset}/{study}"))?;
    match output {
        Some(path) => {
            let saved = save_projection(&projection, path)
                .with_context(|| format!("save {}", path.display()))?;
            print_saved(&saved);
        }
        None => print_preview(&projection),
    }
    Ok(())
}

/// Extract every study of `dataset` into `output_dir` (default `outputs`
/// under `root`).
pub fn run_batch(
    catalog: &Catalog,
    dataset: &str,
    root: &Path,
    output_dir: Option<&Path>,
) -> Result<Vec<SavedProjection>> {
    let target = batch_output_dir(root, output_dir);
    info!(dataset, output_dir = %target.display(), "starting batch");
    extract_all_with(catalog, dataset, root, &target, print_saved)
        .with_context(|| format!("extract all studies of {dataset}"))
}
