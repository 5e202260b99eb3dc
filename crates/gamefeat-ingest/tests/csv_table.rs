//! Integration tests for CSV ingestion.

use std::io::Write;

use gamefeat_ingest::{IngestError, load_raw_frame};

fn write_fixture(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn loads_headers_and_rows() {
    let file = write_fixture("AppID,Name,Price\n10,Counter-Strike,9.99\n20,,\n");
    let df = load_raw_frame(file.path()).expect("load frame");

    assert_eq!(df.height(), 2);
    let names: Vec<String> = df
        .get_column_names_owned()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, ["AppID", "Name", "Price"]);

    // Blank cells surface as nulls, not empty strings.
    assert_eq!(df.column("Name").expect("Name").null_count(), 1);
    assert_eq!(df.column("Price").expect("Price").null_count(), 1);
}

#[test]
fn pads_short_records_with_nulls() {
    let file = write_fixture("AppID,Name,Price\n10,Portal\n");
    let df = load_raw_frame(file.path()).expect("load frame");
    assert_eq!(df.height(), 1);
    assert_eq!(df.column("Price").expect("Price").null_count(), 1);
}

#[test]
fn header_only_file_yields_empty_frame() {
    let file = write_fixture("AppID,Name\n");
    let df = load_raw_frame(file.path()).expect("load frame");
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn missing_file_fails_loudly() {
    let err = load_raw_frame(std::path::Path::new("/nonexistent/games.csv"))
        .expect_err("expected load failure");
    assert!(matches!(err, IngestError::Csv(_) | IngestError::Io(_)));
}
