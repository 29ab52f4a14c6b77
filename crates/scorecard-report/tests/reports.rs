use polars::prelude::*;

use scorecard_report::render::{category_table, comparison_table, histogram_table, summary_table};
use scorecard_report::{
    ReportError, category_distribution, compare_histograms, histogram, summarize,
};

fn loans() -> DataFrame {
    df! {
        "UniqueID" => [1i64, 2, 3, 4, 5, 6, 7],
        "loan_default" => [0i64, 0, 1, 0, 1, 1, 0],
        "Employment_Type" => [
            Some("Salaried"), Some("Salaried"), Some("Salaried"), Some("Salaried"),
            Some("Self employed"), Some("Self employed"), None,
        ],
        "AgeInYear" => [Some(25i64), Some(35), Some(45), None, Some(55), Some(65), Some(30)],
    }
    .unwrap()
}

#[test]
fn category_distribution_json() {
    let distribution = category_distribution(&loans(), "Employment_Type", "loan_default").unwrap();
    let json = serde_json::to_string_pretty(&distribution).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "column": "Employment_Type",
      "target": "loan_default",
      "rows": [
        {
          "category": "Salaried",
          "not_default": 3,
          "default": 1,
          "total": 4,
          "default_rate": 0.25
        },
        {
          "category": "Self employed",
          "not_default": 0,
          "default": 2,
          "total": 2,
          "default_rate": 1.0
        }
      ]
    }
    "#);
}

#[test]
fn summary_reports_every_column() {
    let summary = summarize(&loans()).unwrap();
    assert_eq!(summary.rows, 7);
    assert_eq!(summary.column_summaries.len(), 4);

    let age = summary.column("AgeInYear").unwrap();
    assert_eq!(age.missing, 1);
    assert_eq!(age.missing_fraction, 0.14);
    assert_eq!(age.unique, 6);
    assert_eq!(age.unique_fraction, 0.86);
    assert_eq!(age.last.as_deref(), Some("30"));

    let rendered = summary_table(&summary).to_string();
    assert!(rendered.contains("Employment_Type"));
    assert!(rendered.contains("0.14"));
}

#[test]
fn histogram_marks_the_mean() {
    let hist = histogram(&loans(), "AgeInYear", 4).unwrap();
    assert_eq!(hist.total, 6);
    assert_eq!(hist.counts.iter().sum::<usize>(), 6);
    assert_eq!(hist.mean, 42.5);

    let rendered = histogram_table(&hist).to_string();
    assert!(rendered.contains("mean 42.50"));
}

#[test]
fn comparison_shares_edges_between_classes() {
    let cmp = compare_histograms(&loans(), "AgeInYear", "loan_default", 4).unwrap();
    assert_eq!(cmp.edges.first(), Some(&25.0));
    assert_eq!(cmp.edges.last(), Some(&65.0));
    assert_eq!(cmp.not_default.total, 3);
    assert_eq!(cmp.default.total, 3);
    assert_eq!(cmp.not_default.counts.len(), cmp.default.counts.len());

    let rendered = comparison_table(&cmp).to_string();
    assert!(rendered.contains("Not default"));
}

#[test]
fn category_table_totals_all_rows() {
    let distribution = category_distribution(&loans(), "Employment_Type", "loan_default").unwrap();
    let rendered = category_table(&distribution).to_string();
    assert!(rendered.contains("Self employed"));
    assert!(rendered.contains("ALL"));
    assert!(rendered.contains("50.0"));
}

#[test]
fn non_binary_target_is_rejected() {
    let df = df! {
        "ltv" => [50.0f64, 60.0],
        "loan_default" => [0i64, 3],
    }
    .unwrap();
    assert!(matches!(
        compare_histograms(&df, "ltv", "loan_default", 2),
        Err(ReportError::NonBinaryTarget { .. })
    ));
}

#[test]
fn missing_column_is_reported() {
    assert!(matches!(
        histogram(&loans(), "ltv", 4),
        Err(ReportError::MissingColumn { .. })
    ));
}
