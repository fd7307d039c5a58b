//! End-to-end extraction against synthetic datasets on disk.

mod common;

use std::fs;

use proptest::prelude::*;

use flowsel_catalog::{Catalog, CatalogError};
use flowsel_extract::{ExtractError, extract, extract_all, save_projection};
use flowsel_ingest::{IngestError, read_csv_table};

use common::{fixture_header, write_csv, write_dataset};

#[test]
fn every_study_projects_declared_columns_in_order() {
    let catalog = Catalog::builtin();
    for rows in [0usize, 1, 7] {
        let root = tempfile::tempdir().unwrap();
        for dataset in catalog.datasets() {
            write_dataset(root.path(), dataset, rows);
            for study in dataset.studies() {
                let projection = extract(catalog, dataset.id, study.id, root.path()).unwrap();

                assert_eq!(projection.columns(), study.unique_columns(), "{}", study.id);
                assert_eq!(projection.rows(), rows);
                assert_eq!(projection.citation, study.citation);
            }
        }
    }
}

#[test]
fn projection_copies_source_values() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    let dataset = catalog.dataset("unsw-nb15").unwrap();
    write_dataset(root.path(), dataset, 4);

    let projection = extract(catalog, "unsw-nb15", "zhou2020_top12", root.path()).unwrap();
    let source = read_csv_table(&root.path().join(dataset.source_path())).unwrap();

    let expected = source.select(projection.columns()).unwrap();
    assert!(projection.frame.equals(&expected));
}

#[test]
fn extraction_is_idempotent() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    write_dataset(root.path(), catalog.dataset("vpn-nonvpn").unwrap(), 5);
    let out = tempfile::tempdir().unwrap();

    let first = extract(catalog, "vpn-nonvpn", "shen2018_lightweight", root.path()).unwrap();
    let second = extract(catalog, "vpn-nonvpn", "shen2018_lightweight", root.path()).unwrap();
    assert!(first.frame.equals(&second.frame));

    save_projection(&first, &out.path().join("a.csv")).unwrap();
    save_projection(&second, &out.path().join("b.csv")).unwrap();
    assert_eq!(
        fs::read(out.path().join("a.csv")).unwrap(),
        fs::read(out.path().join("b.csv")).unwrap()
    );
}

#[test]
fn saved_projection_round_trips() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    write_dataset(root.path(), catalog.dataset("cic-ids").unwrap(), 3);
    let projection = extract(catalog, "cic-ids", "lotfollahi2017", root.path()).unwrap();

    let path = root.path().join("subset").join("lotfollahi.csv");
    let saved = save_projection(&projection, &path).unwrap();
    let reloaded = read_csv_table(&saved.path).unwrap();

    assert!(saved.path.is_absolute());
    assert_eq!((saved.rows, saved.columns), (3, 19));
    assert_eq!(reloaded.get_column_names(), projection.frame.get_column_names());
    assert!(reloaded.equals(&projection.frame));
}

#[test]
fn unknown_dataset_and_study_are_distinct() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();

    let err = extract(catalog, "not-a-dataset", "x", root.path()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Catalog(CatalogError::UnknownDataset { .. })
    ));

    let err = extract(catalog, "cic-ids", "not-a-study", root.path()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Catalog(CatalogError::UnknownStudy { .. })
    ));
}

#[test]
fn missing_source_reports_absolute_path() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();

    let err = extract(catalog, "cic-ids", "anderson2016", root.path()).unwrap_err();
    match err {
        ExtractError::Ingest(IngestError::FileNotFound { path }) => {
            assert!(path.is_absolute());
            assert!(path.ends_with("Data/CIC-IDS/CIC-IDS-2017-train_features.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_source_is_a_parse_error() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    let dataset = catalog.dataset("unsw-nb15").unwrap();
    let path = root.path().join(dataset.source_path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "dur,spkts\n1,2,3,4,5\n").unwrap();

    let err = extract(catalog, "unsw-nb15", "zhou2020_top12", root.path()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Ingest(IngestError::CsvParse { .. })
    ));
}

#[test]
fn batch_writes_one_file_per_study() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    let dataset = catalog.dataset("cic-ids").unwrap();
    write_dataset(root.path(), dataset, 2);
    let out_dir = root.path().join("out");

    let saved = extract_all(catalog, "cic-ids", root.path(), &out_dir).unwrap();

    let mut files: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "cic-ids_anderson2016.csv",
            "cic-ids_draper_gil2016.csv",
            "cic-ids_lotfollahi2017.csv",
        ]
    );
    assert_eq!(saved.len(), 3);
    for (entry, study) in saved.iter().zip(dataset.studies()) {
        let table = read_csv_table(&entry.path).unwrap();
        let names: Vec<&str> = table
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, study.columns);
        assert_eq!(entry.study, study.id);
    }
}

#[test]
fn batch_stops_at_first_failure_and_keeps_earlier_files() {
    let catalog = Catalog::builtin();
    let root = tempfile::tempdir().unwrap();
    let dataset = catalog.dataset("cic-ids").unwrap();
    let anderson = dataset.study("anderson2016").unwrap();
    // Enough for the first study only.
    write_csv(
        &root.path().join(dataset.source_path()),
        &fixture_header(anderson.columns),
        2,
    );
    let out_dir = root.path().join("out");

    let err = extract_all(catalog, "cic-ids", root.path(), &out_dir).unwrap_err();

    assert!(matches!(err, ExtractError::MissingColumns { .. }));
    assert!(out_dir.join("cic-ids_anderson2016.csv").exists());
    assert!(!out_dir.join("cic-ids_draper_gil2016.csv").exists());
    assert!(!out_dir.join("cic-ids_lotfollahi2017.csv").exists());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn missing_columns_named_exactly(
        drop_mask in prop::collection::vec(any::<bool>(), 35)
    ) {
        let catalog = Catalog::builtin();
        let (dataset, study) = catalog.study("cic-ids", "draper_gil2016").unwrap();
        let dropped: Vec<&str> = study
            .columns
            .iter()
            .zip(&drop_mask)
            .filter(|(_, drop)| **drop)
            .map(|(column, _)| *column)
            .collect();
        let kept: Vec<&str> = study
            .columns
            .iter()
            .filter(|column| !dropped.contains(*column))
            .copied()
            .collect();

        let root = tempfile::tempdir().unwrap();
        write_csv(&root.path().join(dataset.source_path()), &fixture_header(&kept), 1);
        let result = extract(catalog, dataset.id, study.id, root.path());

        if dropped.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(ExtractError::MissingColumns { columns }) => {
                    prop_assert_eq!(columns, dropped.iter().map(|c| c.to_string()).collect::<Vec<_>>());
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
                Ok(_) => prop_assert!(false, "extraction should fail"),
            }
        }
    }
}
