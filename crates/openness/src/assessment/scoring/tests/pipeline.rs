use super::common::*;
use crate::assessment::answers::{AnswerError, AnswerScale, AnswerSet};
use crate::assessment::domain::Classification;
use crate::assessment::scoring::ThresholdClassifier;

fn scenario_answers() -> AnswerSet {
    answers(&[
        ("ON1", 2.0),
        ("ON2", 2.0),
        ("ON3", 2.0),
        ("ON4", 2.0),
        ("OM1", 5.0),
        ("OM2", 5.0),
    ])
}

#[test]
fn weak_network_and_strong_mind_are_reported_in_attention_order() {
    let report = pipeline()
        .evaluate(&scenario_answers(), &ThresholdClassifier::new(2.5, 3.5))
        .expect("likert answers");

    let network = report.dimension(NETWORK).expect("network scored");
    assert_eq!(network.mean_score, Some(2.0));
    assert_eq!(network.classification, Classification::Low);
    let mind = report.dimension(MIND).expect("mind scored");
    assert_eq!(mind.mean_score, Some(5.0));
    assert_eq!(mind.classification, Classification::High);

    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.recommendations[0].dimension, NETWORK);
    assert_eq!(
        report.recommendations[0].recommendation_text,
        "Map and invite missing sectors."
    );
    assert_eq!(report.recommendations[1].dimension, MIND);
    assert_eq!(
        report.recommendations[1].recommendation_text,
        "Mentor other partnerships."
    );
    assert!(report.completion.is_complete());
    assert_eq!(report.threshold_warning, None);
}

#[test]
fn repeated_runs_produce_identical_tables() {
    let pipeline = pipeline();
    let thresholds = ThresholdClassifier::new(2.5, 3.5);
    let answers = answers(&[("ON1", 3.0), ("ON2", 4.0), ("OM2", 1.0)]);

    let first = pipeline.evaluate(&answers, &thresholds).expect("likert answers");
    let second = pipeline.evaluate(&answers, &thresholds).expect("likert answers");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn misordered_thresholds_still_produce_a_report() {
    let report = pipeline()
        .evaluate(&scenario_answers(), &ThresholdClassifier::new(4.0, 3.0))
        .expect("misordering is advisory");

    assert!(report.threshold_warning.is_some());
    assert_eq!(report.dimensions.len(), 2);
    assert_eq!(
        report.dimension(NETWORK).map(|result| result.classification),
        Some(Classification::Low)
    );
}

#[test]
fn variable_table_lists_every_item_including_unanswered() {
    let report = pipeline()
        .evaluate(&answers(&[("ON1", 3.0)]), &ThresholdClassifier::new(2.5, 3.5))
        .expect("likert answers");

    assert_eq!(report.variables.len(), 6);
    assert_eq!(report.variables[0].score, Some(3.0));
    assert!(report.variables[1..].iter().all(|row| row.score.is_none()));
    assert_eq!(report.completion.percent, 16);

    let rows = report.dimension_rows();
    assert_eq!(rows[1].classification, "N/A");
    assert_eq!(rows[1].mean_score, None);
}

#[test]
fn matrix_answers_are_rejected() {
    let answers = AnswerSet::from_scores(AnswerScale::Matrix, [("ON1", 2.5), ("OM1", 3.0)])
        .expect("valid matrix answers");

    let err = pipeline()
        .evaluate(&answers, &ThresholdClassifier::new(2.5, 3.5))
        .expect_err("scale mismatch");
    assert_eq!(
        err,
        AnswerError::ScaleMismatch {
            expected: AnswerScale::Likert,
            actual: AnswerScale::Matrix,
        }
    );
}
