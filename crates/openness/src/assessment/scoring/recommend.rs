use super::super::catalog::{FallbackTable, RecommendationTable, NO_RECOMMENDATION};
use super::super::domain::Classification;
use super::DimensionResult;
use serde::{Deserialize, Serialize};

/// Recommendation attached to one dimension result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub dimension: String,
    pub classification: Classification,
    pub recommendation_text: String,
}

/// Looks up the text for a `(dimension, classification)` pair.
///
/// The classification is matched case-insensitively. An unknown dimension falls
/// back to the classification-only table; `N/A` and unrecognised classifications
/// yield [`NO_RECOMMENDATION`].
pub fn recommend(
    dimension: &str,
    classification: &str,
    recommendations: &RecommendationTable,
    fallbacks: &FallbackTable,
) -> String {
    match Classification::parse(classification) {
        Some(classification) => {
            recommend_for(dimension, classification, recommendations, fallbacks).to_string()
        }
        None => NO_RECOMMENDATION.to_string(),
    }
}

pub(crate) fn recommend_for<'a>(
    dimension: &str,
    classification: Classification,
    recommendations: &'a RecommendationTable,
    fallbacks: &'a FallbackTable,
) -> &'a str {
    if classification == Classification::NotAvailable {
        return NO_RECOMMENDATION;
    }

    recommendations
        .get(dimension.trim(), classification)
        .or_else(|| fallbacks.get(classification))
        .unwrap_or(NO_RECOMMENDATION)
}

/// Recommendations for every result, weakest classification first, then by dimension name.
pub fn build_recommendation_report(
    dimension_results: &[DimensionResult],
    recommendations: &RecommendationTable,
    fallbacks: &FallbackTable,
) -> Vec<RecommendationEntry> {
    let mut entries: Vec<RecommendationEntry> = dimension_results
        .iter()
        .map(|result| RecommendationEntry {
            dimension: result.dimension.clone(),
            classification: result.classification,
            recommendation_text: recommend_for(
                &result.dimension,
                result.classification,
                recommendations,
                fallbacks,
            )
            .to_string(),
        })
        .collect();

    entries.sort_by(|a, b| {
        a.classification
            .priority()
            .cmp(&b.classification.priority())
            .then_with(|| a.dimension.cmp(&b.dimension))
    });

    entries
}
