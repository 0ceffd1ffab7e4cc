use std::fs;

use serde_json::{Value, json};
use tempfile::tempdir;

use tanaw_model::CleanError;
use tanaw_report::{EnrollmentSummary, read_records, summarize_file};

const CLEANED: &str = "\
Region,BEIS School ID,School Name,Grade 1 Male,Grade 1 Female,Kindergarten Male
Region I,100001,STO. NINO ELEMENTARY SCHOOL,10,12,5
Region I,100002,RIZAL NATIONAL HIGH SCHOOL,3,,4
Region II,100002,MABINI PRIMARY SCHOOL,5000,0,2
";

#[test]
fn summary_of_cleaned_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cleaned.csv");
    fs::write(&path, CLEANED).unwrap();

    let summary = summarize_file(&path, 13).unwrap();
    assert_eq!(
        summary,
        EnrollmentSummary {
            total_enrollments: 5036,
            male_enrollments: 5024,
            female_enrollments: 12,
            number_of_schools: 2,
            regions_with_schools: 2,
            number_of_year_levels: 13,
        }
    );

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["totalEnrollments"], json!(5036));
    assert_eq!(json["numberOfYearLevels"], json!(13));
    assert!(json.get("total_enrollments").is_none());
}

#[test]
fn records_keep_types() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cleaned.csv");
    fs::write(&path, CLEANED).unwrap();

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["Region"], json!("Region I"));
    assert_eq!(records[0]["Grade 1 Male"], json!(10));
    assert_eq!(records[1]["Grade 1 Female"], Value::Null);
    assert_eq!(records[2]["School Name"], json!("MABINI PRIMARY SCHOOL"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = summarize_file(&dir.path().join("absent.csv"), 13).unwrap_err();
    assert!(matches!(err, CleanError::FileNotFound { .. }));
}
