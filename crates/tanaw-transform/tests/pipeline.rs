use std::fs;
use std::path::Path;

use polars::prelude::DataType;
use regex::Regex;
use tempfile::{TempDir, tempdir};

use tanaw_model::{CleanError, CleaningOptions, Layout, RawTable, UNKNOWN_SENTINEL};
use tanaw_transform::{CleaningRules, clean_file, clean_path, clean_table};

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn options(dir: &Path) -> CleaningOptions {
    CleaningOptions::default().with_output_dir(dir.join("cleaned_files"))
}

fn cell(table: &tanaw_transform::CleanedTable, column: &str, row: usize) -> String {
    let value = table.frame.column(column).expect("column").get(row).expect("row");
    value.to_string().trim_matches('"').to_string()
}

const SCHOOL_CSV: &str = "\
Department of Education,,,,,,,,,
Enrollment SY 2023-2024,,,,,,,,,
,,,,,,,,,
Region,BEIS School ID,School Name,Street Address,Province,Municipality,Barangay,G1 Male,G1 Female,K Male
Region I,100001,Sto. Nino ES,# 123 - Purok 2,Ilocos Norte,Laoag,Barangay 1,10,12,5
Region I,100002,Rizal NHS,N/A,Ilocos Norte,Laoag,-----,5001,3,4
Region II,100003,Mabini P/S,Street 5,Cagayan,Tuguegarao,N/A,5000,0,2
Region II,100004,San Jose CS,,Cagayan,Aparri,Centro,-1,4,4
,,,,,,,,,
";

const REGION_CSV: &str = "\
Learner enrollment by region,,,,
Region,K,,G1,G1
,Male,Female,Male,Female
Region I,120,-,130,125
Region II,80,90,-,70
,,,,
";

#[test]
fn school_level_end_to_end() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "schools.CSV", SCHOOL_CSV);
    let options = options(dir.path());

    let outcome = clean_file(&input, &options).unwrap();
    assert_eq!(outcome.layout, Layout::SchoolLevel);
    assert_eq!(outcome.rows_read, 4);
    assert_eq!(outcome.rows_dropped, 2);
    assert_eq!(outcome.rows_retained, outcome.rows_read - outcome.rows_dropped);
    assert_eq!(
        outcome.columns,
        vec![
            "Region",
            "BEIS School ID",
            "School Name",
            "Street Address",
            "Province",
            "Municipality",
            "Barangay",
            "Grade 1 Male",
            "Grade 1 Female",
            "Kindergarten Male",
        ]
    );

    let path = outcome.output_path.expect("output path");
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(Regex::new(r"^cleaned_\d{8}_\d{6}(_\d+)?\.csv$").unwrap().is_match(&name));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Region,BEIS School ID,School Name"));
    assert!(written.contains("STO. NINO ELEMENTARY SCHOOL"));
    assert!(written.contains("MABINI PRIMARY SCHOOL"));
    assert!(!written.contains("RIZAL NATIONAL HIGH SCHOOL"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn school_level_cell_values() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "schools.csv", SCHOOL_CSV);
    let cleaned = clean_path(&input, &options(dir.path())).unwrap();

    assert_eq!(cleaned.height(), 2);
    assert_eq!(cell(&cleaned, "School Name", 0), "STO. NINO ELEMENTARY SCHOOL");
    let address = cell(&cleaned, "Street Address", 0);
    assert!(address.contains("PRK. 2"));
    assert!(!address.starts_with(['#', '-', ' ']));
    assert_eq!(cell(&cleaned, "Barangay", 0), "BRGY. 1");
    assert_eq!(cell(&cleaned, "Barangay", 1), UNKNOWN_SENTINEL);
    assert_eq!(cell(&cleaned, "Grade 1 Male", 1), "5000");
    assert_eq!(
        cleaned.frame.column("Grade 1 Male").unwrap().dtype(),
        &DataType::Int64
    );
    assert!(!dir.path().join("cleaned_files").exists());
}

#[test]
fn region_level_end_to_end() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "regions.csv", REGION_CSV);
    let outcome = clean_file(&input, &options(dir.path())).unwrap();

    assert_eq!(outcome.layout, Layout::RegionLevel);
    assert_eq!(
        outcome.columns,
        vec![
            "Region",
            "Kindergarten Male",
            "Kindergarten Female",
            "Grade 1 Male",
            "Grade 1 Female",
        ]
    );
    assert_eq!(outcome.rows_read, 2);
    assert_eq!(outcome.rows_retained, 2);
    assert_eq!(outcome.rows_dropped, 0);

    let written = fs::read_to_string(outcome.output_path.unwrap()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[1], "Region I,120,0,130,125");
    assert_eq!(lines[2], "Region II,80,90,0,70");
}

#[test]
fn region_anchor_block() {
    let raw = RawTable::from_rows([
        vec!["Summary", "", ""],
        vec!["Region", "", ""],
        vec!["", "Kinder", "Grade 2"],
        vec!["", "Female", "Male"],
        vec!["NCR", "7", "-"],
    ]);
    let rules = CleaningRules::standard().unwrap();
    let cleaned = clean_table(&raw, &CleaningOptions::default(), &rules).unwrap();

    assert_eq!(cleaned.layout, Layout::RegionLevel);
    assert_eq!(
        cleaned.column_names(),
        vec!["Region", "Kindergarten Female", "Grade 2 Male"]
    );
    assert_eq!(cleaned.height(), 1);
}

#[test]
fn missing_header_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "banner.csv", "Title only\nnothing,here\n1,2\n");
    let options = options(dir.path());

    let err = clean_file(&input, &options).unwrap_err();
    assert!(matches!(err, CleanError::HeaderNotFound { rows_scanned: 3 }));
    assert!(!options.output_dir.exists());
}

#[test]
fn missing_text_columns_are_fatal() {
    let raw = RawTable::from_rows([
        vec!["Region", "BEIS School ID", "School Name", "G1 Male"],
        vec!["I", "1", "A", "3"],
    ]);
    let rules = CleaningRules::standard().unwrap();
    let err = clean_table(&raw, &CleaningOptions::default(), &rules).unwrap_err();
    assert!(matches!(err, CleanError::SchemaMismatch { .. }));
}

#[test]
fn rejects_non_csv_input() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "schools.xlsx", SCHOOL_CSV);
    let err = clean_file(&input, &options(dir.path())).unwrap_err();
    assert!(matches!(err, CleanError::UnsupportedExtension { .. }));
}

#[test]
fn custom_ceiling_applies() {
    let dir = tempdir().unwrap();
    let input = write_csv(&dir, "schools.csv", SCHOOL_CSV);
    let options = options(dir.path()).with_enrollment_ceiling(11.0);
    let cleaned = clean_path(&input, &options).unwrap();

    // Every school has a count above 11 or below zero.
    assert_eq!(cleaned.rows_read, 4);
    assert_eq!(cleaned.height(), 0);
}

#[test]
fn trailing_comma_column_is_dropped() {
    let dir = tempdir().unwrap();
    let input = write_csv(
        &dir,
        "export.csv",
        "\
Region,BEIS School ID,School Name,Street Address,Province,Municipality,Barangay,G1 Male,
Region I,100001,Rizal ES,Purok 1,Ilocos Norte,Laoag,Barangay 1,10,
Region I,100002,Luna ES,Road 2,Ilocos Norte,Batac,Barangay 2,12,
",
    );
    let outcome = clean_file(&input, &options(dir.path())).unwrap();

    assert_eq!(outcome.rows_read, 2);
    assert_eq!(outcome.rows_dropped, 0);
    assert_eq!(outcome.rows_retained, 2);
    assert_eq!(outcome.columns.last().map(String::as_str), Some("Grade 1 Male"));

    let written = fs::read_to_string(outcome.output_path.expect("output path")).unwrap();
    assert!(written.lines().all(|line| !line.ends_with(',')));
}
