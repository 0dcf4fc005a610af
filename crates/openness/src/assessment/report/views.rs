use serde::Serialize;

/// Rounds a mean for display and export.
pub fn round_score(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// One row of the variable-score table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableScoreView {
    #[serde(rename = "Variable")]
    pub variable: String,
    #[serde(rename = "Dimension")]
    pub dimension: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
}

/// One row of the dimension-score table, mean rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScoreView {
    #[serde(rename = "Dimension")]
    pub dimension: String,
    #[serde(rename = "MeanScore")]
    pub mean_score: Option<f64>,
    #[serde(rename = "n_Variables")]
    pub variable_count: usize,
    #[serde(rename = "Classification")]
    pub classification: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    #[serde(rename = "Dimension")]
    pub dimension: String,
    #[serde(rename = "Classification")]
    pub classification: &'static str,
    #[serde(rename = "Recommendation")]
    pub recommendation: String,
}
