//! Tests for loading cleaning options from JSON.

use std::io::Write;

use chrono::NaiveDate;
use scorecard_model::{CleanOptions, OptionsError};
use tempfile::NamedTempFile;

fn options_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{contents}").expect("write options");
    file
}

#[test]
fn partial_json_keeps_defaults() {
    let file = options_file(r#"{ "reference_date": "2020-06-01", "min_credit_score": 30.0 }"#);
    let options = CleanOptions::from_json_file(file.path()).expect("load options");

    assert_eq!(
        options.reference_date,
        NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
    );
    assert!((options.min_credit_score - 30.0).abs() < f64::EPSILON);
    assert_eq!(options.bureau_columns, CleanOptions::default().bureau_columns);
    assert_eq!(options.no_bureau_sentinel, "No Bureau History Available");
}

#[test]
fn duration_columns_round_trip_through_json() {
    let defaults = CleanOptions::default();
    let json = serde_json::to_string(&defaults).expect("serialize");
    let file = options_file(&json);
    let loaded = CleanOptions::from_json_file(file.path()).expect("load options");
    assert_eq!(loaded, defaults);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = options_file("{ not json");
    let result = CleanOptions::from_json_file(file.path());
    assert!(matches!(result, Err(OptionsError::Parse { .. })));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = CleanOptions::from_json_file(std::path::Path::new("/nonexistent/options.json"));
    assert!(matches!(result, Err(OptionsError::Read { .. })));
}
