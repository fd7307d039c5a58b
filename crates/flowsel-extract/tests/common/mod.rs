//! Synthetic dataset fixtures laid out the way the catalog expects.

use std::fs;
use std::path::Path;

use flowsel_catalog::DatasetEntry;

/// Extra columns every fixture carries besides the required ones.
pub const EXTRA_COLUMNS: &[&str] = &["Flow ID", "Label"];

/// Header for a fixture holding `columns` plus [`EXTRA_COLUMNS`], with the
/// extras first and the rest reversed so the source order never matches a
/// study's order.
pub fn fixture_header(columns: &[&str]) -> Vec<String> {
    let mut header: Vec<String> = EXTRA_COLUMNS.iter().map(|c| c.to_string()).collect();
    for column in columns.iter().rev() {
        if !header.iter().any(|existing| existing == column) {
            header.push((*column).to_string());
        }
    }
    header
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write a CSV with `header` and `rows` rows of integer data.
pub fn write_csv(path: &Path, header: &[String], rows: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut text = header
        .iter()
        .map(|name| quote(name))
        .collect::<Vec<_>>()
        .join(",");
    text.push('\n');
    for row in 0..rows {
        let line = (0..header.len())
            .map(|col| (row * 100 + col).to_string())
            .collect::<Vec<_>>()
            .join(",");
        text.push_str(&line);
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

/// Write a dataset's source file under `root` holding the union of all its
/// studies' columns.
pub fn write_dataset(root: &Path, dataset: &DatasetEntry, rows: usize) {
    let mut columns: Vec<&str> = Vec::new();
    for study in dataset.studies() {
        columns.extend(study.columns.iter().copied());
    }
    write_csv(&root.join(dataset.source_path()), &fixture_header(&columns), rows);
}
