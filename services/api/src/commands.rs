use chrono::{Local, NaiveDate};
use clap::Args;
use openness::assessment::matrix::{questions_for, MatrixAssessment};
use openness::assessment::report::export::{export_matrix, export_report};
use openness::assessment::{
    AnswerImportError, AnswerScale, AnswerSet, AssessmentReport, MatrixDimension,
    MatrixSubmission, Questionnaire, ScoringPipeline,
};
use openness::config::ScoringConfig;
use openness::error::AppError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers as a JSON object or a CSV file with Variable and Score columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Classify as Low when the mean is below this value
    #[arg(long)]
    pub(crate) low_threshold: Option<f64>,
    /// Classify as Medium when the mean is at most this value
    #[arg(long)]
    pub(crate) medium_threshold: Option<f64>,
    /// Write the variable, dimension and recommendation tables as CSV into this directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Date stamped into exported file names (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct MatrixArgs {
    /// JSON file with `answers` (score or option label per variable) and `structure` levels
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Write the matrix table as CSV into this directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Date stamped into the exported file name (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_questionnaire() {
    let questionnaire = Questionnaire::aperto();
    println!("APERTO questionnaire ({} items)", questionnaire.len());

    for dimension in questionnaire.dimensions() {
        println!("\n{dimension}");
        for item in questionnaire.items_for_dimension(dimension) {
            println!("- [{}] {}", item.variable_id, item.prompt);
            println!(
                "  1 = {} | 5 = {}",
                item.scale_low_text, item.scale_high_text
            );
        }
    }

    println!("\nMatrix questions");
    for dimension in MatrixDimension::ordered() {
        println!("\n{}", dimension.title());
        for question in questions_for(dimension) {
            println!("- [{}] {}", question.variable_id, question.prompt);
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs, defaults: &ScoringConfig) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        low_threshold,
        medium_threshold,
        export_dir,
        date,
    } = args;

    let pipeline = ScoringPipeline::standard();
    let answers = AnswerSet::from_path(AnswerScale::Likert, &answers)?;
    answers.ensure_known(&pipeline.catalog().questionnaire)?;

    let thresholds = defaults
        .with_overrides(low_threshold, medium_threshold)?
        .classifier();
    let report = pipeline.evaluate(&answers, &thresholds)?;
    render_assessment(&report);

    if let Some(directory) = export_dir {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let written = export_report(&report, &directory, date)?;
        render_written(&written);
    }

    Ok(())
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), AppError> {
    let MatrixArgs {
        answers,
        export_dir,
        date,
    } = args;

    let submission = load_submission(&answers)?;
    let assessment = submission.score()?;
    render_matrix(&assessment);

    if let Some(directory) = export_dir {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let written = export_matrix(&assessment, &directory, date)?;
        render_written(&[written]);
    }

    Ok(())
}

fn load_submission(path: &Path) -> Result<MatrixSubmission, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let submission = serde_json::from_reader(reader).map_err(AnswerImportError::from)?;
    info!(path = %path.display(), "loaded matrix answers");
    Ok(submission)
}

pub(crate) fn render_assessment(report: &AssessmentReport) {
    let completion = report.completion;
    println!(
        "Openness assessment: {}/{} answered ({}%)",
        completion.answered, completion.total, completion.percent
    );
    println!(
        "Thresholds: Low < {} | Medium <= {} | High above",
        report.thresholds.low_threshold, report.thresholds.medium_threshold
    );
    if let Some(warning) = &report.threshold_warning {
        println!("Warning: {warning}");
    }

    println!("\nDimension scores");
    for row in report.dimension_rows() {
        let mean = row
            .mean_score
            .map(|mean| format!("{mean:.3}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {}: {} over {} variables -> {}",
            row.dimension, mean, row.variable_count, row.classification
        );
    }

    println!("\nRecommendations");
    for entry in &report.recommendations {
        println!(
            "- [{}] {}: {}",
            entry.classification, entry.dimension, entry.recommendation_text
        );
    }
}

pub(crate) fn render_matrix(assessment: &MatrixAssessment) {
    println!("Openness matrix");
    for row in assessment.rows() {
        let openness = row
            .openness
            .map(|value| format!("{value:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let structure = row
            .structure
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {}: openness {} ({}), regulation->autonomy {}",
            row.dimension, openness, row.band, structure
        );
    }

    println!("\nInterpretation");
    for point in &assessment.points {
        println!("- {}", point.interpretation());
    }
}

fn render_written(paths: &[PathBuf]) {
    println!("\nExported");
    for path in paths {
        println!("- {}", path.display());
    }
}
