use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use scorecard_ingest::{IngestError, IngestOptions, read_csv_table, write_csv_table};

#[test]
fn empty_cells_load_as_nulls() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("loans.csv");
    fs::write(
        &path,
        "UniqueID,PERFORM_CNS.SCORE,Employment.Type\n420825,0,Salaried\n537409,598,\n",
    )
    .expect("write csv");

    let df = read_csv_table(&path, &IngestOptions::default()).expect("read csv");

    assert_eq!(df.height(), 2);
    let employment = df.column("Employment.Type").expect("column");
    assert_eq!(employment.null_count(), 1);
    let score = df.column("PERFORM_CNS.SCORE").expect("column");
    assert_eq!(score.null_count(), 0);
}

#[test]
fn written_nulls_are_blank_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out").join("clean.csv");
    let columns: Vec<Column> = vec![
        Series::new("UniqueID".into(), vec![1i64, 2]).into_column(),
        Series::new("PERFORM_CNS_SCORE".into(), vec![Some(738i64), None]).into_column(),
    ];
    let mut df = DataFrame::new(columns).expect("frame");

    write_csv_table(&mut df, &path).expect("write csv");

    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "UniqueID,PERFORM_CNS_SCORE\n1,738\n2,\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let result = read_csv_table(&dir.path().join("absent.csv"), &IngestOptions::default());
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
