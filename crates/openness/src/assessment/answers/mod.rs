//! Per-session answer collection.

mod parser;

pub use parser::AnswerImportError;

use super::domain::Questionnaire;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// The two answer scales used by the assessment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerScale {
    /// Mode A: whole numbers 1 to 5.
    Likert,
    /// Mode B: 1 to 3 in steps of 0.5.
    Matrix,
}

impl AnswerScale {
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Likert => (1.0, 5.0),
            Self::Matrix => (1.0, 3.0),
        }
    }

    pub const fn step(self) -> f64 {
        match self {
            Self::Likert => 1.0,
            Self::Matrix => 0.5,
        }
    }

    pub fn validate(self, value: f64) -> Result<f64, AnswerError> {
        let (min, max) = self.bounds();
        if !value.is_finite() || value < min || value > max {
            return Err(AnswerError::OutOfRange {
                scale: self,
                value,
            });
        }

        let steps = (value - min) / self.step();
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(AnswerError::OffStep {
                scale: self,
                value,
            });
        }

        Ok(value)
    }
}

/// Answers keyed by variable id. Missing variables stay missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSet {
    scale: AnswerScale,
    scores: BTreeMap<String, f64>,
}

impl AnswerSet {
    pub fn new(scale: AnswerScale) -> Self {
        Self {
            scale,
            scores: BTreeMap::new(),
        }
    }

    pub fn likert() -> Self {
        Self::new(AnswerScale::Likert)
    }

    pub fn matrix() -> Self {
        Self::new(AnswerScale::Matrix)
    }

    /// Builds an answer set from `(variable, score)` pairs.
    pub fn from_scores<I, K>(scale: AnswerScale, scores: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut answers = Self::new(scale);
        for (variable_id, score) in scores {
            answers.record(variable_id, score)?;
        }
        Ok(answers)
    }

    pub fn from_json_reader<R: Read>(
        scale: AnswerScale,
        reader: R,
    ) -> Result<Self, AnswerImportError> {
        parser::parse_json(scale, reader)
    }

    pub fn from_csv_reader<R: Read>(
        scale: AnswerScale,
        reader: R,
    ) -> Result<Self, AnswerImportError> {
        parser::parse_csv(scale, reader)
    }

    /// Loads answers from a `.csv` file or, for any other extension, a JSON object.
    pub fn from_path(scale: AnswerScale, path: impl AsRef<Path>) -> Result<Self, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(scale, file)
        } else {
            Self::from_json_reader(scale, file)
        }
    }

    pub fn scale(&self) -> AnswerScale {
        self.scale
    }

    /// Stores an answer, returning the value it replaced.
    pub fn record(
        &mut self,
        variable_id: impl Into<String>,
        value: f64,
    ) -> Result<Option<f64>, AnswerError> {
        let variable_id = variable_id.into().trim().to_string();
        if variable_id.is_empty() {
            return Err(AnswerError::EmptyVariableId);
        }
        let value = self.scale.validate(value)?;
        Ok(self.scores.insert(variable_id, value))
    }

    pub fn remove(&mut self, variable_id: &str) -> Option<f64> {
        self.scores.remove(variable_id.trim())
    }

    /// Drops every answer, starting a fresh run.
    pub fn reset(&mut self) {
        self.scores.clear();
    }

    pub fn get(&self, variable_id: &str) -> Option<f64> {
        self.scores.get(variable_id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Fails on the first answer whose variable the questionnaire does not define.
    pub fn ensure_known(&self, questionnaire: &Questionnaire) -> Result<(), AnswerError> {
        match self
            .scores
            .keys()
            .find(|variable_id| !questionnaire.contains(variable_id))
        {
            Some(unknown) => Err(AnswerError::UnknownVariable(unknown.clone())),
            None => Ok(()),
        }
    }

    pub fn completion(&self, questionnaire: &Questionnaire) -> Completion {
        let answered = questionnaire
            .items()
            .iter()
            .filter(|item| self.scores.contains_key(&item.variable_id))
            .count();
        Completion::new(answered, questionnaire.len())
    }
}

/// Progress through a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    /// Truncated whole percentage.
    pub percent: u8,
}

impl Completion {
    pub fn new(answered: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (answered.min(total) * 100 / total) as u8
        };
        Self {
            answered,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer {value} is outside the {scale:?} scale")]
    OutOfRange { scale: AnswerScale, value: f64 },
    #[error("answer {value} does not fall on a {scale:?} scale step")]
    OffStep { scale: AnswerScale, value: f64 },
    #[error("answer is missing a variable id")]
    EmptyVariableId,
    #[error("variable {0} is not part of the questionnaire")]
    UnknownVariable(String),
    #[error("expected {expected:?} answers but got {actual:?} answers")]
    ScaleMismatch {
        expected: AnswerScale,
        actual: AnswerScale,
    },
    #[error("'{label}' is not an option of question {variable_id}")]
    UnknownOption { variable_id: String, label: String },
    #[error("structure level must be 1, 2 or 3 (got {0})")]
    InvalidStructure(u8),
}
