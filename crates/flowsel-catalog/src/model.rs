//! Catalog entry types.

use std::path::Path;

use crate::error::{CatalogError, Result};

/// A literature-derived column subset of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyEntry {
    pub id: &'static str,
    /// Provenance shown to users; never interpreted.
    pub citation: &'static str,
    /// Required columns in output order.
    pub columns: &'static [&'static str],
}

impl StudyEntry {
    /// Required columns with repeated names dropped, first occurrence kept.
    pub fn unique_columns(&self) -> Vec<&'static str> {
        let mut seen = Vec::with_capacity(self.columns.len());
        for column in self.columns {
            if !seen.contains(column) {
                seen.push(*column);
            }
        }
        seen
    }
}

/// A network-flow dataset and the studies defined over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetEntry {
    pub id: &'static str,
    /// Source CSV, relative to the project root.
    pub source: &'static str,
    pub studies: &'static [StudyEntry],
}

impl DatasetEntry {
    pub fn source_path(&self) -> &Path {
        Path::new(self.source)
    }

    pub fn studies(&self) -> impl Iterator<Item = &StudyEntry> {
        self.studies.iter()
    }

    pub fn study_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.studies.iter().map(|study| study.id)
    }

    /// Look up a study by exact identifier.
    pub fn study(&self, id: &str) -> Result<&StudyEntry> {
        self.studies
            .iter()
            .find(|study| study.id == id)
            .ok_or_else(|| CatalogError::UnknownStudy {
                dataset: self.id.to_string(),
                study: id.to_string(),
            })
    }
}
