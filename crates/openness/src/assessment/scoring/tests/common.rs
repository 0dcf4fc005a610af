use std::sync::Arc;

use crate::assessment::answers::{AnswerScale, AnswerSet};
use crate::assessment::catalog::{AssessmentCatalog, FallbackTable, RecommendationTable};
use crate::assessment::domain::{Classification, Questionnaire, QuestionnaireItem};
use crate::assessment::scoring::ScoringPipeline;

pub(super) const NETWORK: &str = "OPEN NETWORK";
pub(super) const MIND: &str = "OPEN MIND";

fn item(dimension: &str, variable_id: &str) -> QuestionnaireItem {
    QuestionnaireItem::new(
        dimension,
        variable_id,
        format!("How open is {variable_id}?"),
        "Closed",
        "Open",
    )
}

/// OPEN NETWORK with four variables, OPEN MIND with two.
pub(super) fn questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        item(NETWORK, "ON1"),
        item(NETWORK, "ON2"),
        item(NETWORK, "ON3"),
        item(NETWORK, "ON4"),
        item(MIND, "OM1"),
        item(MIND, "OM2"),
    ])
    .expect("fixture ids are unique")
}

pub(super) fn recommendations() -> RecommendationTable {
    let mut table = RecommendationTable::new();
    table.insert(NETWORK, Classification::Low, "Map and invite missing sectors.");
    table.insert(NETWORK, Classification::Medium, "Formalise the partnership.");
    table.insert(NETWORK, Classification::High, "Keep the network diverse.");
    table.insert(MIND, Classification::High, "Mentor other partnerships.");
    table
}

pub(super) fn fallbacks() -> FallbackTable {
    let mut table = FallbackTable::new();
    table.insert(Classification::Low, "Generic low advice.");
    table.insert(Classification::Medium, "Generic medium advice.");
    table.insert(Classification::High, "Generic high advice.");
    table
}

pub(super) fn pipeline() -> ScoringPipeline {
    ScoringPipeline::new(Arc::new(AssessmentCatalog::new(
        questionnaire(),
        recommendations(),
        fallbacks(),
    )))
}

pub(super) fn answers(scores: &[(&str, f64)]) -> AnswerSet {
    AnswerSet::from_scores(AnswerScale::Likert, scores.iter().copied()).expect("valid answers")
}
