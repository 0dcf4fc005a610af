//! Openness assessment: reference data, answers, scoring and report tables.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod matrix;
mod questionnaire;
pub mod report;
pub mod scoring;

pub use answers::{AnswerError, AnswerImportError, AnswerScale, AnswerSet, Completion};
pub use catalog::{AssessmentCatalog, FallbackTable, RecommendationTable, NO_RECOMMENDATION};
pub use domain::{Classification, Questionnaire, QuestionnaireError, QuestionnaireItem};
pub use matrix::{
    score_matrix, MatrixAssessment, MatrixDimension, MatrixPoint, MatrixSubmission,
    StructureLevel,
};
pub use report::export::{ExportError, ExportTable};
pub use report::AssessmentReport;
pub use scoring::{
    aggregate, build_recommendation_report, classify, recommend, Classifier, DimensionAggregate,
    DimensionResult, MatrixBand, RecommendationEntry, ScoringPipeline, ThresholdClassifier,
};
