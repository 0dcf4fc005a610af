use super::super::answers::{AnswerSet, Completion};
use super::super::domain::Questionnaire;
use super::super::scoring::{DimensionResult, RecommendationEntry, ThresholdClassifier};
use super::views::{round_score, DimensionScoreView, RecommendationView, VariableScoreView};
use serde::Serialize;

/// Every table produced by one Mode A scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub variables: Vec<VariableScoreView>,
    pub dimensions: Vec<DimensionResult>,
    pub recommendations: Vec<RecommendationEntry>,
    pub completion: Completion,
    pub thresholds: ThresholdClassifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_warning: Option<String>,
}

impl AssessmentReport {
    pub(crate) fn new(
        questionnaire: &Questionnaire,
        answers: &AnswerSet,
        dimensions: Vec<DimensionResult>,
        recommendations: Vec<RecommendationEntry>,
        completion: Completion,
        thresholds: ThresholdClassifier,
        threshold_warning: Option<String>,
    ) -> Self {
        let variables = questionnaire
            .items()
            .iter()
            .map(|item| VariableScoreView {
                variable: item.variable_id.clone(),
                dimension: item.dimension.clone(),
                question: item.prompt.clone(),
                score: answers.get(&item.variable_id),
            })
            .collect();

        Self {
            variables,
            dimensions,
            recommendations,
            completion,
            thresholds,
            threshold_warning,
        }
    }

    pub fn dimension(&self, name: &str) -> Option<&DimensionResult> {
        self.dimensions
            .iter()
            .find(|result| result.dimension == name)
    }

    pub fn dimension_rows(&self) -> Vec<DimensionScoreView> {
        self.dimensions
            .iter()
            .map(|result| DimensionScoreView {
                dimension: result.dimension.clone(),
                mean_score: result.mean_score.map(|mean| round_score(mean, 3)),
                variable_count: result.variable_count,
                classification: result.classification.label(),
            })
            .collect()
    }

    pub fn recommendation_rows(&self) -> Vec<RecommendationView> {
        self.recommendations
            .iter()
            .map(|entry| RecommendationView {
                dimension: entry.dimension.clone(),
                classification: entry.classification.label(),
                recommendation: entry.recommendation_text.clone(),
            })
            .collect()
    }
}
