use std::fs;

use harmony_ingest::{SourcePaths, verify_source_paths};
use harmony_model::FeedError;

#[test]
fn missing_items_file_is_reported_with_example_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = SourcePaths {
        items: dir.path().join("nope.csv"),
        inventory: dir.path().join("also-nope.csv"),
        sale_items: dir.path().join("still-nope.xlsx"),
    };

    let error = verify_source_paths(&paths).expect_err("missing inputs");
    match &error {
        FeedError::MissingInput { path, example } => {
            assert!(path.ends_with("nope.csv"));
            assert_eq!(example, "2023AW_SKU.csv");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.exit_code(), harmony_model::EXIT_FILE_REQUIRED);
}

#[test]
fn later_sources_are_checked_even_when_earlier_ones_exist() {
    let dir = tempfile::tempdir().expect("temp dir");
    let items = dir.path().join("items.csv");
    let inventory = dir.path().join("inventory.csv");
    fs::write(&items, "JAN code\n1\n").expect("write items");
    fs::write(&inventory, "JAN code\n1\n").expect("write inventory");
    let paths = SourcePaths {
        items,
        inventory,
        sale_items: dir.path().join("missing.xlsx"),
    };

    let error = verify_source_paths(&paths).expect_err("missing sale items");
    match error {
        FeedError::MissingInput { example, .. } => assert_eq!(example, "0918_SALE.xlsx"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn all_present_passes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let items = dir.path().join("items.csv");
    let inventory = dir.path().join("inventory.csv");
    let sale_items = dir.path().join("sale.xlsx");
    for path in [&items, &inventory, &sale_items] {
        fs::write(path, "stub").expect("write file");
    }
    let paths = SourcePaths {
        items,
        inventory,
        sale_items,
    };
    verify_source_paths(&paths).expect("all inputs present");
}
