//! Enrollment table cleaning.
//!
//! This crate turns a located, classified raw table into a cleaned, typed
//! table:
//!
//! - **rules**: ordered special-case replacement rules
//! - **normalization**: school name/address cleaning and numeric coercion
//! - **school**: school-level text cleaning and quality filtering
//! - **region**: region-level header synthesis
//! - **filter**: unrealistic enrollment row removal
//! - **standardize**: canonical column names
//! - **strategy**: per-layout cleaning selected by the classifier
//! - **frame**: text tables and the typed output frame
//! - **output**: timestamped CSV output
//! - **pipeline**: `clean_table` / `clean_file` entry points

pub mod filter;
pub mod frame;
pub mod normalization;
pub mod output;
pub mod pipeline;
pub mod region;
pub mod rules;
pub mod school;
pub mod standardize;
pub mod strategy;

pub use frame::{CleanedTable, TextTable, build_frame};
pub use output::{cleaned_file_name, write_cleaned_frame};
pub use pipeline::{clean_file, clean_path, clean_table};
pub use rules::{CleaningRules, RuleKind, RuleSet, RuleSpec, SpecialCaseRule};
pub use strategy::{CleaningStrategy, NormalizedTable};
