//! Catalog lookups and listing.

use std::fmt::Write;

use crate::datasets::DATASETS;
use crate::error::{CatalogError, Result};
use crate::model::{DatasetEntry, StudyEntry};

static BUILTIN: Catalog = Catalog { datasets: DATASETS };

/// Registry of datasets and the studies defined over them.
///
/// Lookups are exact-match on identifiers. Enumeration follows declaration
/// order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    datasets: &'static [DatasetEntry],
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog over caller-provided entries.
    pub const fn new(datasets: &'static [DatasetEntry]) -> Self {
        Self { datasets }
    }

    pub fn datasets(&self) -> impl Iterator<Item = &DatasetEntry> {
        self.datasets.iter()
    }

    pub fn dataset_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.datasets.iter().map(|dataset| dataset.id)
    }

    pub fn dataset(&self, id: &str) -> Result<&DatasetEntry> {
        self.datasets
            .iter()
            .find(|dataset| dataset.id == id)
            .ok_or_else(|| CatalogError::UnknownDataset {
                dataset: id.to_string(),
            })
    }

    /// Resolve a dataset and one of its studies.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownDataset`] before checking the study,
    /// then [`CatalogError::UnknownStudy`].
    pub fn study(&self, dataset_id: &str, study_id: &str) -> Result<(&DatasetEntry, &StudyEntry)> {
        let dataset = self.dataset(dataset_id)?;
        let study = dataset.study(study_id)?;
        Ok((dataset, study))
    }

    /// Human-readable listing: each dataset id followed by indented
    /// `- study: citation` lines.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (index, dataset) in self.datasets.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(dataset.id);
            for study in dataset.studies() {
                let _ = write!(out, "\n  - {}: {}", study.id, study.citation);
            }
        }
        out
    }
}
