use chrono::NaiveDate;
use openness::assessment::report::export::{export_matrix, export_report, table_to_string};
use openness::assessment::{
    AnswerScale, AnswerSet, ExportError, ExportTable, MatrixSubmission, ScoringPipeline,
    ThresholdClassifier,
};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

fn sample_report() -> openness::assessment::AssessmentReport {
    let answers = AnswerSet::from_scores(
        AnswerScale::Likert,
        [("ON1", 2.0), ("ON2", 2.0), ("ON3", 3.0), ("ON4", 2.0)],
    )
    .expect("valid answers");
    ScoringPipeline::standard()
        .evaluate(&answers, &ThresholdClassifier::new(2.5, 3.5))
        .expect("likert answers")
}

#[test]
fn tables_use_the_download_column_layout() {
    let report = sample_report();

    let variables = table_to_string(&report, ExportTable::VariableScores).expect("variables");
    let mut lines = variables.lines();
    assert_eq!(lines.next(), Some("Variable,Dimension,Question,Score"));
    assert!(lines
        .next()
        .is_some_and(|line| line.starts_with("ON1,OPEN NETWORK,") && line.ends_with(",2.0")));
    assert_eq!(variables.lines().count(), 21);

    let dimensions = table_to_string(&report, ExportTable::DimensionScores).expect("dimensions");
    let mut lines = dimensions.lines();
    assert_eq!(
        lines.next(),
        Some("Dimension,MeanScore,n_Variables,Classification")
    );
    assert_eq!(lines.next(), Some("OPEN NETWORK,2.25,4,Low"));
    assert_eq!(lines.next(), Some("OPEN COMMUNICATION,,3,N/A"));

    let recommendations =
        table_to_string(&report, ExportTable::Recommendations).expect("recommendations");
    let mut lines = recommendations.lines();
    assert_eq!(lines.next(), Some("Dimension,Classification,Recommendation"));
    assert!(lines
        .next()
        .is_some_and(|line| line.starts_with("OPEN NETWORK,Low,")));
}

#[test]
fn export_report_writes_dated_files() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let dir = tmp.path().join("exports");
    let written = export_report(&sample_report(), &dir, report_date()).expect("export succeeds");

    let names: Vec<String> = written
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .map(str::to_string)
        .collect();
    assert_eq!(
        names,
        vec![
            "openness_variable_scores_2025-03-14.csv",
            "openness_dimension_scores_2025-03-14.csv",
            "openness_recommendations_2025-03-14.csv",
        ]
    );
    assert!(written.iter().all(|path| path.exists()));
}

#[test]
fn export_matrix_writes_axis_columns() {
    let submission: MatrixSubmission = serde_json::from_str(
        r#"{ "answers": { "INF1": 2.0, "INF2": 3.0 }, "structure": { "interaction": 2 } }"#,
    )
    .expect("valid submission");
    let assessment = submission.score().expect("valid answers");

    let tmp = tempfile::tempdir().expect("temp dir");
    let dir = tmp.path().to_path_buf();
    let path = export_matrix(&assessment, &dir, report_date()).expect("export succeeds");
    assert!(path.ends_with("openness_matrix_scores_2025-03-14.csv"));

    let contents = std::fs::read_to_string(&path).expect("export readable");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Dimension,X_LevelOpenness(1-3),Y_Regulation→Autonomy(1-3),Band")
    );
    assert_eq!(lines.next(), Some("Engagement,,,N/A"));
    assert_eq!(lines.next(), Some("Application,,,N/A"));
    assert_eq!(lines.next(), Some("Interaction,2.5,2,High"));
}

#[test]
fn exported_variable_scores_can_be_read_back() {
    let report = sample_report();
    let csv = table_to_string(&report, ExportTable::VariableScores).expect("variables");

    let answers = AnswerSet::from_csv_reader(AnswerScale::Likert, csv.as_bytes())
        .expect("export is valid input");
    assert_eq!(answers.len(), 4);
    assert_eq!(answers.get("ON3"), Some(3.0));
}

#[test]
fn matrix_table_is_not_written_from_an_assessment_report() {
    let err = table_to_string(&sample_report(), ExportTable::MatrixScores)
        .expect_err("matrix scores are not part of the report");
    assert!(matches!(
        err,
        ExportError::UnsupportedTable(ExportTable::MatrixScores)
    ));
    assert!(err.to_string().contains("matrix_scores"));
}
