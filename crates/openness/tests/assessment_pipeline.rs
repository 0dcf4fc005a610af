use openness::assessment::{
    AnswerScale, AnswerSet, Classification, ScoringPipeline, ThresholdClassifier,
    NO_RECOMMENDATION,
};
use openness::config::ScoringConfig;

fn full_answers(score: f64) -> AnswerSet {
    let pipeline = ScoringPipeline::standard();
    AnswerSet::from_scores(
        AnswerScale::Likert,
        pipeline
            .catalog()
            .questionnaire
            .items()
            .iter()
            .map(|item| (item.variable_id.clone(), score)),
    )
    .expect("valid answers")
}

#[test]
fn aperto_questionnaire_is_scored_per_dimension() {
    let pipeline = ScoringPipeline::standard();
    let thresholds = ScoringConfig::default().classifier();

    let report = pipeline
        .evaluate(&full_answers(3.0), &thresholds)
        .expect("likert answers");

    assert_eq!(report.dimensions.len(), 8);
    assert!(report
        .dimensions
        .iter()
        .all(|result| result.classification == Classification::Medium));
    assert!(report.completion.is_complete());
    assert_eq!(report.completion.percent, 100);

    let network = report
        .recommendations
        .iter()
        .find(|entry| entry.dimension == "OPEN NETWORK")
        .expect("network recommendation");
    assert!(network
        .recommendation_text
        .starts_with("Consolidate shared governance"));
}

#[test]
fn unanswered_dimensions_sink_to_the_end_of_the_report() {
    let pipeline = ScoringPipeline::standard();
    let answers = AnswerSet::from_scores(
        AnswerScale::Likert,
        [("OM1", 1.0), ("OM2", 2.0), ("OSp1", 5.0), ("OSp2", 5.0)],
    )
    .expect("valid answers");

    let report = pipeline
        .evaluate(&answers, &ThresholdClassifier::new(2.5, 3.5))
        .expect("likert answers");

    assert_eq!(report.recommendations.len(), 8);
    assert_eq!(report.recommendations[0].dimension, "OPEN MIND");
    assert_eq!(report.recommendations[0].classification, Classification::Low);
    assert_eq!(report.recommendations[1].dimension, "OPEN SPACE");
    assert_eq!(report.recommendations[1].classification, Classification::High);
    assert!(report.recommendations[2..].iter().all(|entry| {
        entry.classification == Classification::NotAvailable
            && entry.recommendation_text == NO_RECOMMENDATION
    }));

    let remaining: Vec<&str> = report.recommendations[2..]
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    let mut sorted = remaining.clone();
    sorted.sort();
    assert_eq!(remaining, sorted);
}

#[test]
fn answers_load_from_json_and_csv() {
    let json = r#"{ "ON1": 4, "ON2": null, "OM1": 2 }"#;
    let answers =
        AnswerSet::from_json_reader(AnswerScale::Likert, json.as_bytes()).expect("json parses");
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get("ON2"), None);

    let csv = "Variable,Dimension,Question,Score\nON1,OPEN NETWORK,Q,4\nON2,OPEN NETWORK,Q,\n OM1 ,OPEN MIND,Q, 2 \n";
    let from_csv =
        AnswerSet::from_csv_reader(AnswerScale::Likert, csv.as_bytes()).expect("csv parses");
    assert_eq!(from_csv, answers);
}
