//! Delimited-text exports of the report tables.

use super::super::matrix::MatrixAssessment;
use super::AssessmentReport;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("table {} is not part of an assessment report", .0.slug())]
    UnsupportedTable(ExportTable),
}

/// The tables a user can download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    VariableScores,
    DimensionScores,
    Recommendations,
    MatrixScores,
}

impl ExportTable {
    pub const fn assessment_tables() -> [Self; 3] {
        [
            Self::VariableScores,
            Self::DimensionScores,
            Self::Recommendations,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::VariableScores => "variable_scores",
            Self::DimensionScores => "dimension_scores",
            Self::Recommendations => "recommendations",
            Self::MatrixScores => "matrix_scores",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw.trim().trim_end_matches(".csv") {
            "variable_scores" | "variables" => Some(Self::VariableScores),
            "dimension_scores" | "dimensions" => Some(Self::DimensionScores),
            "recommendations" => Some(Self::Recommendations),
            "matrix_scores" | "matrix" => Some(Self::MatrixScores),
            _ => None,
        }
    }

    /// `openness_<table>_<YYYY-MM-DD>.csv`
    pub fn file_name(self, date: NaiveDate) -> String {
        format!("openness_{}_{}.csv", self.slug(), date.format("%Y-%m-%d"))
    }
}

fn write_rows<W, T>(writer: W, rows: &[T]) -> Result<(), ExportError>
where
    W: Write,
    T: Serialize,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes one assessment table. `MatrixScores` belongs to a matrix assessment and
/// is rejected here; use [`write_matrix`] for it.
pub fn write_table<W: Write>(
    report: &AssessmentReport,
    table: ExportTable,
    writer: W,
) -> Result<(), ExportError> {
    match table {
        ExportTable::VariableScores => write_rows(writer, &report.variables),
        ExportTable::DimensionScores => write_rows(writer, &report.dimension_rows()),
        ExportTable::Recommendations => write_rows(writer, &report.recommendation_rows()),
        ExportTable::MatrixScores => Err(ExportError::UnsupportedTable(table)),
    }
}

pub fn write_matrix<W: Write>(assessment: &MatrixAssessment, writer: W) -> Result<(), ExportError> {
    write_rows(writer, &assessment.rows())
}

pub fn table_to_string(
    report: &AssessmentReport,
    table: ExportTable,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_table(report, table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn matrix_to_string(assessment: &MatrixAssessment) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_matrix(assessment, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes the three Mode A tables into `directory`, returning the created paths.
pub fn export_report(
    report: &AssessmentReport,
    directory: &Path,
    date: NaiveDate,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(directory)?;
    let mut written = Vec::new();

    for table in ExportTable::assessment_tables() {
        let path = directory.join(table.file_name(date));
        let file = File::create(&path)?;
        write_table(report, table, file)?;
        written.push(path);
    }

    Ok(written)
}

pub fn export_matrix(
    assessment: &MatrixAssessment,
    directory: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(ExportTable::MatrixScores.file_name(date));
    let file = File::create(&path)?;
    write_matrix(assessment, file)?;
    Ok(path)
}
