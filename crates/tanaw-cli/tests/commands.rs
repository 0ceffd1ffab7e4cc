//! Integration tests for the subcommand implementations.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::tempdir;

use tanaw_cli::cli::{CleanArgs, Cli, Command, RecordsArgs, SummaryArgs};
use tanaw_cli::commands::{run_clean, run_records, run_summary};
use tanaw_model::Layout;

const RAW: &str = "\
Enrollment report,,,,,,,,
Region,BEIS School ID,School Name,Street Address,Province,Municipality,Barangay,G1 Male,G1 Female
NCR,1,Rizal ES,Purok 1,Metro Manila,Pasig,Poblacion,20,22
NCR,2,Mabini HS,N/A,Metro Manila,Pasig,,7000,1
CAR,3,Luna CS,Road 2,Benguet,Baguio,Barangay 4,15,16
";

fn clean_args(input: &Path, output_dir: &Path, dry_run: bool) -> CleanArgs {
    CleanArgs {
        input: input.to_path_buf(),
        output_dir: Some(output_dir.to_path_buf()),
        ceiling: None,
        config: None,
        dry_run,
    }
}

#[test]
fn clean_then_summarize() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, RAW).unwrap();
    let out_dir = dir.path().join("out");

    let report = run_clean(&clean_args(&input, &out_dir, false)).unwrap();
    assert_eq!(report.outcome.layout, Layout::SchoolLevel);
    assert_eq!(report.outcome.rows_retained, 2);
    assert_eq!(report.outcome.rows_dropped, 1);
    let cleaned = report.outcome.output_path.expect("written");
    assert!(cleaned.starts_with(&out_dir));

    let summary = run_summary(&SummaryArgs {
        input: cleaned.clone(),
        json: true,
        year_levels: None,
    })
    .unwrap();
    assert_eq!(summary.male_enrollments, 35);
    assert_eq!(summary.female_enrollments, 38);
    assert_eq!(summary.total_enrollments, 73);
    assert_eq!(summary.number_of_schools, 2);
    assert_eq!(summary.regions_with_schools, 2);
    assert_eq!(summary.number_of_year_levels, 13);

    let records = run_records(&RecordsArgs {
        input: cleaned,
        limit: Some(1),
    })
    .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["School Name"], "RIZAL ELEMENTARY SCHOOL");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, RAW).unwrap();
    let out_dir = dir.path().join("out");

    let report = run_clean(&clean_args(&input, &out_dir, true)).unwrap();
    assert!(report.dry_run);
    assert!(report.outcome.output_path.is_none());
    assert!(!out_dir.exists());
}

#[test]
fn failure_carries_context() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.txt");
    fs::write(&input, RAW).unwrap();

    let err = run_clean(&clean_args(&input, dir.path(), false)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("clean "));
    assert!(message.contains(".csv file"));
}

#[test]
fn parses_clean_flags() {
    let cli = Cli::try_parse_from([
        "tanaw",
        "--log-format",
        "json",
        "clean",
        "raw.csv",
        "--ceiling",
        "4000",
        "--dry-run",
    ])
    .unwrap();
    match cli.command {
        Command::Clean(args) => {
            assert_eq!(args.ceiling, Some(4000.0));
            assert!(args.dry_run);
            assert!(args.output_dir.is_none());
        }
        _ => panic!("expected clean"),
    }
}
