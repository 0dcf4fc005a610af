mod classify;
mod recommend;

#[cfg(test)]
mod tests;

pub use classify::{
    classify, Classifier, MatrixBand, MatrixBandClassifier, ThresholdClassifier,
};
pub use recommend::{build_recommendation_report, recommend, RecommendationEntry};

use super::answers::{AnswerError, AnswerScale, AnswerSet};
use super::catalog::AssessmentCatalog;
use super::domain::{Classification, Questionnaire};
use super::report::AssessmentReport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Mean score of one dimension before banding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAggregate {
    pub dimension: String,
    /// `None` when no variable of the dimension was answered.
    pub mean_score: Option<f64>,
    pub answered_count: usize,
    /// Variables defined for the dimension, answered or not.
    pub variable_count: usize,
}

impl DimensionAggregate {
    pub fn classify<C>(self, classifier: &C) -> DimensionResult
    where
        C: Classifier<Band = Classification>,
    {
        let classification = classifier.classify(self.mean_score);
        DimensionResult {
            dimension: self.dimension,
            mean_score: self.mean_score,
            answered_count: self.answered_count,
            variable_count: self.variable_count,
            classification,
        }
    }
}

/// Banded score of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub dimension: String,
    pub mean_score: Option<f64>,
    pub answered_count: usize,
    pub variable_count: usize,
    pub classification: Classification,
}

/// Reduces answers to one aggregate per dimension, in questionnaire order.
///
/// Unanswered variables are left out of the mean entirely; answers for variables
/// the questionnaire does not define are ignored.
pub fn aggregate(questionnaire: &Questionnaire, answers: &AnswerSet) -> Vec<DimensionAggregate> {
    questionnaire
        .dimensions()
        .into_iter()
        .map(|dimension| {
            let mut variable_count = 0;
            let mut answered_count = 0;
            let mut total = 0.0;

            for item in questionnaire.items_for_dimension(dimension) {
                variable_count += 1;
                if let Some(score) = answers.get(&item.variable_id) {
                    answered_count += 1;
                    total += score;
                }
            }

            let mean_score = if answered_count == 0 {
                None
            } else {
                Some(total / answered_count as f64)
            };

            DimensionAggregate {
                dimension: dimension.to_string(),
                mean_score,
                answered_count,
                variable_count,
            }
        })
        .collect()
}

/// Stateless Mode A pipeline over shared reference data.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    catalog: Arc<AssessmentCatalog>,
}

impl ScoringPipeline {
    pub fn new(catalog: Arc<AssessmentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(AssessmentCatalog::standard()))
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    pub fn score<C>(&self, answers: &AnswerSet, classifier: &C) -> Vec<DimensionResult>
    where
        C: Classifier<Band = Classification>,
    {
        aggregate(&self.catalog.questionnaire, answers)
            .into_iter()
            .map(|dimension| dimension.classify(classifier))
            .collect()
    }

    /// Runs aggregate, classify and recommend, returning every table a caller renders.
    ///
    /// Only Likert answers are accepted; matrix answers go through
    /// [`score_matrix`](super::matrix::score_matrix).
    pub fn evaluate(
        &self,
        answers: &AnswerSet,
        thresholds: &ThresholdClassifier,
    ) -> Result<AssessmentReport, AnswerError> {
        if answers.scale() != AnswerScale::Likert {
            return Err(AnswerError::ScaleMismatch {
                expected: AnswerScale::Likert,
                actual: answers.scale(),
            });
        }

        let warning = thresholds.warning();
        if let Some(message) = &warning {
            warn!(
                low = thresholds.low_threshold,
                medium = thresholds.medium_threshold,
                "{message}"
            );
        }

        let dimensions = self.score(answers, thresholds);
        let recommendations = build_recommendation_report(
            &dimensions,
            &self.catalog.recommendations,
            &self.catalog.fallbacks,
        );
        let completion = answers.completion(&self.catalog.questionnaire);

        debug!(
            answered = completion.answered,
            total = completion.total,
            dimensions = dimensions.len(),
            "scored openness assessment"
        );

        Ok(AssessmentReport::new(
            &self.catalog.questionnaire,
            answers,
            dimensions,
            recommendations,
            completion,
            *thresholds,
            warning,
        ))
    }
}
