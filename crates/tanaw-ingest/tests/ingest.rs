use std::io::Write;

use tanaw_ingest::{HeaderRow, TableHeader, classify_layout, locate_header, read_raw_table};
use tanaw_model::{CleanError, Layout};

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn school_file_behind_banners() {
    let file = csv_file(
        "\u{feff}Department of Education\n\
         School Year 2023-2024,,\n\
         ,,,,\n\
         Region , BEIS School ID,School Name,G1 Male,G1 Female\n\
         I,1,A,3,4\n",
    );
    let raw = read_raw_table(file.path()).unwrap();
    assert_eq!(raw.row(0).map(|row| row[0].as_str()), Some("Department of Education"));

    let header = locate_header(&raw).unwrap();
    assert_eq!(header, HeaderRow::Single(3));

    let classified = classify_layout(&raw, header).unwrap();
    assert_eq!(classified.layout(), Layout::SchoolLevel);
    assert_eq!(classified.last_row(), 3);
}

#[test]
fn first_matching_row_wins() {
    let file = csv_file("Region,G1\nRegion,K\nI,1\n");
    let raw = read_raw_table(file.path()).unwrap();
    assert_eq!(locate_header(&raw).unwrap(), HeaderRow::Single(0));
}

#[test]
fn region_file_with_two_row_header() {
    let file = csv_file("Region,K,,G1,G1\n,Male,Female,Male,Female\nI,1,2,3,-\n");
    let raw = read_raw_table(file.path()).unwrap();
    let header = locate_header(&raw).unwrap();
    let classified = classify_layout(&raw, header).unwrap();
    assert_eq!(
        classified,
        TableHeader::Region {
            anchor: None,
            grade_row: 0,
            gender_row: 1,
        }
    );
    assert_eq!(raw.rows_after(classified.last_row()).len(), 1);
}

#[test]
fn headerless_file_fails() {
    let file = csv_file("a,b\n1,2\n");
    let raw = read_raw_table(file.path()).unwrap();
    let err = locate_header(&raw).unwrap_err();
    assert!(matches!(err, CleanError::HeaderNotFound { rows_scanned: 2 }));
}
