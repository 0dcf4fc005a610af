use crate::infra::{AppState, ScoringState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use openness::assessment::matrix::{questions_for, LabelPlacement, MatrixPoint, MatrixQuestion};
use openness::assessment::report::chart::{polar_layout, radar_series, PolarSlice, RadarPoint};
use openness::assessment::report::export::{matrix_to_string, table_to_string};
use openness::assessment::{
    AnswerScale, AnswerSet, AssessmentReport, ExportTable, MatrixDimension, MatrixSubmission,
    QuestionnaireItem, StructureLevel,
};
use openness::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    /// `null` leaves a variable unanswered.
    #[serde(default)]
    pub(crate) answers: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub(crate) low_threshold: Option<f64>,
    #[serde(default)]
    pub(crate) medium_threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChartData {
    pub(crate) polar: Vec<PolarSlice>,
    pub(crate) radar: Vec<RadarPoint>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) report: AssessmentReport,
    pub(crate) chart: ChartData,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireResponse {
    pub(crate) dimensions: Vec<String>,
    pub(crate) items: Vec<QuestionnaireItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatrixDimensionQuestions {
    pub(crate) dimension: MatrixDimension,
    pub(crate) title: &'static str,
    pub(crate) questions: Vec<MatrixQuestion>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StructureOption {
    pub(crate) value: u8,
    pub(crate) description: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatrixQuestionsResponse {
    pub(crate) dimensions: Vec<MatrixDimensionQuestions>,
    pub(crate) structure_options: Vec<StructureOption>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatrixResponse {
    pub(crate) points: Vec<MatrixPoint>,
    pub(crate) labels: Vec<LabelPlacement>,
    pub(crate) interpretations: Vec<String>,
}

pub(crate) fn router(scoring: ScoringState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .route("/api/v1/assessment/export/:table", post(export_endpoint))
        .route("/api/v1/matrix/questions", get(matrix_questions_endpoint))
        .route("/api/v1/matrix/score", post(matrix_score_endpoint))
        .route("/api/v1/matrix/export", post(matrix_export_endpoint))
        .layer(Extension(scoring))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questionnaire_endpoint(
    Extension(state): Extension<ScoringState>,
) -> Json<QuestionnaireResponse> {
    let questionnaire = &state.pipeline.catalog().questionnaire;
    Json(QuestionnaireResponse {
        dimensions: questionnaire
            .dimensions()
            .into_iter()
            .map(str::to_string)
            .collect(),
        items: questionnaire.items().to_vec(),
    })
}

fn evaluate(state: &ScoringState, request: ScoreRequest) -> Result<AssessmentReport, AppError> {
    let ScoreRequest {
        answers,
        low_threshold,
        medium_threshold,
    } = request;

    let answers = AnswerSet::from_scores(
        AnswerScale::Likert,
        answers
            .into_iter()
            .filter_map(|(variable_id, score)| score.map(|score| (variable_id, score))),
    )?;
    answers.ensure_known(&state.pipeline.catalog().questionnaire)?;

    let thresholds = state
        .defaults
        .with_overrides(low_threshold, medium_threshold)?
        .classifier();
    Ok(state.pipeline.evaluate(&answers, &thresholds)?)
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<ScoringState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let report = evaluate(&state, payload)?;
    let chart = ChartData {
        polar: polar_layout(&report.dimensions),
        radar: radar_series(&report.dimensions),
    };

    Ok(Json(ScoreResponse { report, chart }))
}

fn csv_attachment(file_name: String, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

fn unknown_table(raw: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("unknown export table '{raw}'") })),
    )
        .into_response()
}

pub(crate) async fn export_endpoint(
    Extension(state): Extension<ScoringState>,
    Path(table): Path<String>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Response, AppError> {
    let table = match ExportTable::from_slug(&table) {
        Some(ExportTable::MatrixScores) | None => return Ok(unknown_table(&table)),
        Some(table) => table,
    };

    let report = evaluate(&state, payload)?;
    let body = table_to_string(&report, table)?;
    let file_name = table.file_name(Local::now().date_naive());
    Ok(csv_attachment(file_name, body))
}

pub(crate) async fn matrix_questions_endpoint() -> Json<MatrixQuestionsResponse> {
    Json(MatrixQuestionsResponse {
        dimensions: MatrixDimension::ordered()
            .into_iter()
            .map(|dimension| MatrixDimensionQuestions {
                dimension,
                title: dimension.title(),
                questions: questions_for(dimension),
            })
            .collect(),
        structure_options: StructureLevel::ordered()
            .into_iter()
            .map(|level| StructureOption {
                value: level.value(),
                description: level.description(),
            })
            .collect(),
    })
}

pub(crate) async fn matrix_score_endpoint(
    Json(payload): Json<MatrixSubmission>,
) -> Result<Json<MatrixResponse>, AppError> {
    let assessment = payload.score()?;
    let interpretations = assessment
        .points
        .iter()
        .map(MatrixPoint::interpretation)
        .collect();

    Ok(Json(MatrixResponse {
        points: assessment.points,
        labels: assessment.labels,
        interpretations,
    }))
}

pub(crate) async fn matrix_export_endpoint(
    Json(payload): Json<MatrixSubmission>,
) -> Result<Response, AppError> {
    let assessment = payload.score()?;
    let body = matrix_to_string(&assessment)?;
    let file_name = ExportTable::MatrixScores.file_name(Local::now().date_naive());
    Ok(csv_attachment(file_name, body))
}
