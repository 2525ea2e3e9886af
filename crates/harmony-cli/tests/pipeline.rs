//! End-to-end pipeline tests over the mock feed data.

use std::fs;
use std::path::{Path, PathBuf};

use harmony_cli::pipeline::{BuildInput, load_sale_config, run};
use harmony_ingest::SourcePaths;
use harmony_model::{EXIT_FILE_REQUIRED, EXIT_VALIDATION, FeedError, SaleConfig};

fn mockdata() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../mockdata/feed")
}

fn mock_paths() -> SourcePaths {
    let dir = mockdata();
    SourcePaths {
        items: dir.join("items.csv"),
        inventory: dir.join("inventory.csv"),
        sale_items: dir.join("sale_items.xlsx"),
    }
}

fn mock_config() -> SaleConfig {
    load_sale_config(&mockdata().join("sale.toml")).expect("load config")
}

fn build_input(output_dir: &Path, dry_run: bool) -> BuildInput {
    BuildInput {
        paths: mock_paths(),
        config: mock_config(),
        output_dir: output_dir.to_path_buf(),
        run_date: "20230918".to_string(),
        dry_run,
    }
}

#[test]
fn build_writes_all_three_feeds_with_matching_row_counts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = run(&build_input(dir.path(), false)).expect("run pipeline");

    // Three of the four items survive the double inner join: one item has no
    // sale row and one sale row has no item.
    assert_eq!(summary.joined_rows, 3);
    assert_eq!(summary.outputs.len(), 3);
    for output in &summary.outputs {
        assert_eq!(output.rows, summary.joined_rows);
        let path = output.path.as_ref().expect("written path");
        assert!(path.exists(), "missing output: {}", path.display());
    }

    let master = fs::read_to_string(dir.path().join("HARMONY_master_20230918000000.tsv"))
        .expect("read master");
    let lines: Vec<&str> = master.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("vendor_code\tsku_code\tbrand_code\tbrand_name\t"));
    assert!(lines[1].contains("AB1234001023"));
    assert!(lines[1].contains("\tACME\t"));
    assert!(lines[1].contains("\tWool Coat\t"));
    assert!(lines[3].contains("\tLinen Shirt\t"));

    let stock = fs::read_to_string(dir.path().join("HARMONY_stock_20230918000000.tsv"))
        .expect("read stock");
    assert_eq!(
        stock,
        "vendor_code\tsku_code\tsales_type\tquantity\n\
         311025910-harmony\tAB1234001023\t1\t5\n\
         311025910-harmony\tAB1234001025\t1\t0\n\
         311025910-harmony\tAB1235002023\t1\t12\n"
    );

    let salesku = fs::read_to_string(dir.path().join("HARMONY_salesku_20230918000000.tsv"))
        .expect("read salesku");
    assert_eq!(
        salesku,
        "cp_sale_id\tsale_start_date\tvendor_code\tsku_code\tsale_price\tdeleted\n\
         10152127\t20230918\t311025910-harmony\tAB1234001023\t20300\t0\n\
         10152127\t20230918\t311025910-harmony\tAB1234001025\t20300\t0\n\
         10152127\t20230918\t311025910-harmony\tAB1235002023\t8400\t0\n"
    );
}

#[test]
fn rerunning_with_the_same_run_date_is_byte_identical() {
    let first = tempfile::tempdir().expect("temp dir");
    let second = tempfile::tempdir().expect("temp dir");
    run(&build_input(first.path(), false)).expect("first run");
    run(&build_input(second.path(), false)).expect("second run");

    for name in [
        "HARMONY_master_20230918000000.tsv",
        "HARMONY_stock_20230918000000.tsv",
        "HARMONY_salesku_20230918000000.tsv",
    ] {
        let a = fs::read(first.path().join(name)).expect("first output");
        let b = fs::read(second.path().join(name)).expect("second output");
        assert_eq!(a, b, "outputs differ for {name}");
    }
}

#[test]
fn dry_run_reports_counts_but_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = run(&build_input(dir.path(), true)).expect("dry run");

    assert_eq!(summary.joined_rows, 3);
    assert!(summary.outputs.iter().all(|output| output.path.is_none()));
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn missing_input_file_aborts_with_the_file_required_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut input = build_input(dir.path(), false);
    input.paths.items = dir.path().join("absent.csv");

    let error = run(&input).expect_err("missing input");
    let feed_error = error.downcast_ref::<FeedError>().expect("classified error");
    assert_eq!(feed_error.exit_code(), EXIT_FILE_REQUIRED);
    assert!(error.to_string().contains("2023AW_SKU.csv"));
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn missing_attribute_column_aborts_before_any_join() {
    let dir = tempfile::tempdir().expect("temp dir");
    let items = dir.path().join("items.csv");
    fs::write(
        &items,
        "JAN code,product_code,attribute1_code\n4514011070115,AB1234,001\n",
    )
    .expect("write items");
    let mut input = build_input(dir.path(), false);
    input.paths.items = items;

    let error = run(&input).expect_err("schema failure");
    let feed_error = error.downcast_ref::<FeedError>().expect("classified error");
    assert!(matches!(feed_error, FeedError::Schema { .. }));
    assert_eq!(feed_error.exit_code(), EXIT_VALIDATION);
    assert!(error.to_string().contains("attribute2_code"));
}

#[test]
fn bad_item_name_format_aborts_with_no_partial_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let items = dir.path().join("items.csv");
    let output_dir = dir.path().join("out");
    // Same shape as the mock items file, but the second item name carries no
    // delimiter at all.
    fs::write(
        &items,
        "JAN code,product_code,attribute1_code,attribute2_code,brand_code,item_name,\
         shop_item_code,item_number,item_description,color_axis_code,color_axis_name,\
         size_axis_code,size_axis_name,material,country_of_origin,list_price\n\
         4514011070115,AB1234,001,023,BR01,ACME◆Wool Coat,SHP-001,IT-001,desc,BK,Black,S,Small,Wool,Italy,29000\n\
         4514011070122,AB1234,001,025,BR01,BRANDONLY,SHP-001,IT-001,desc,BK,Black,M,Medium,Wool,Italy,29000\n",
    )
    .expect("write items");
    let mut input = build_input(&output_dir, false);
    input.paths.items = items;

    let error = run(&input).expect_err("format failure");
    let feed_error = error.downcast_ref::<FeedError>().expect("classified error");
    assert!(matches!(feed_error, FeedError::Format { .. }));
    assert_eq!(feed_error.exit_code(), EXIT_VALIDATION);
    assert!(!output_dir.exists(), "no output may be written on failure");
}

#[test]
fn sale_rows_without_a_matching_item_contribute_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = run(&build_input(dir.path(), false)).expect("run pipeline");

    // The fixture sale sheet has a row for JAN 4514011070153, which exists in
    // neither items nor inventory.
    let stock = fs::read_to_string(dir.path().join("HARMONY_stock_20230918000000.tsv"))
        .expect("read stock");
    assert!(!stock.contains("4514011070153"));
    assert_eq!(summary.source_rows.sale_items, 4);
    assert_eq!(summary.joined_rows, 3);
}
