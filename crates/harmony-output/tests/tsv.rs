use std::fs;

use harmony_model::Table;
use harmony_output::write_tsv;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|name| (*name).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|value| (*value).to_string()).collect());
    }
    table
}

#[test]
fn writes_header_then_tab_separated_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("HARMONY_stock_20230918000000.tsv");
    let stock = table(
        &["vendor_code", "sku_code", "sales_type", "quantity"],
        &[
            &["311025910-harmony", "AB1234001023", "1", "5"],
            &["311025910-harmony", "AB1234001025", "1", "0"],
        ],
    );

    write_tsv(&stock, &path).expect("write tsv");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        contents,
        "vendor_code\tsku_code\tsales_type\tquantity\n\
         311025910-harmony\tAB1234001023\t1\t5\n\
         311025910-harmony\tAB1234001025\t1\t0\n"
    );
}

#[test]
fn values_are_never_quoted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.tsv");
    let data = table(&["a", "b"], &[&["has \"quotes\"", "plain, comma"]]);

    write_tsv(&data, &path).expect("write tsv");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "a\tb\nhas \"quotes\"\tplain, comma\n");
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("dir").join("out.tsv");
    let data = table(&["a"], &[&["1"]]);

    write_tsv(&data, &path).expect("write tsv");
    assert!(path.exists());
}

#[test]
fn empty_table_writes_only_the_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.tsv");
    let data = table(&["a", "b"], &[]);

    write_tsv(&data, &path).expect("write tsv");
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "a\tb\n");
}
