use super::{AnswerError, AnswerScale, AnswerSet};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: {source}")]
    Answer {
        row: usize,
        #[source]
        source: AnswerError,
    },
    #[error("variable {variable_id}: {source}")]
    Entry {
        variable_id: String,
        #[source]
        source: AnswerError,
    },
}

/// Reads a flat JSON object of `variable -> score`; `null` leaves a variable unanswered.
pub(crate) fn parse_json<R: Read>(
    scale: AnswerScale,
    reader: R,
) -> Result<AnswerSet, AnswerImportError> {
    let raw: BTreeMap<String, Option<f64>> = serde_json::from_reader(reader)?;
    let mut answers = AnswerSet::new(scale);

    for (variable_id, score) in raw {
        if let Some(score) = score {
            answers
                .record(variable_id.as_str(), score)
                .map_err(|source| AnswerImportError::Entry {
                    variable_id,
                    source,
                })?;
        }
    }

    Ok(answers)
}

/// Reads a CSV with `Variable` and `Score` columns; other columns are ignored so a
/// variable-score export can be fed straight back in.
pub(crate) fn parse_csv<R: Read>(
    scale: AnswerScale,
    reader: R,
) -> Result<AnswerSet, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = AnswerSet::new(scale);

    for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
        let row = record?;
        if let Some(score) = row.score {
            answers
                .record(row.variable, score)
                .map_err(|source| AnswerImportError::Answer {
                    row: index + 1,
                    source,
                })?;
        }
    }

    Ok(answers)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Variable")]
    variable: String,
    #[serde(rename = "Score", default, deserialize_with = "blank_as_none")]
    score: Option<f64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}
