//! Mode B: the two-axis matrix of openness level against regulation/autonomy.

mod placement;
mod questions;

pub use placement::{place_labels, LabelPlacement, CLUSTER_RADIUS, SOLO_OFFSET};
pub use questions::{dimension_of, questions_for, MatrixOption, MatrixQuestion};

use super::answers::{AnswerError, AnswerScale, AnswerSet};
use super::report::views::round_score;
use super::scoring::{Classifier, MatrixBand, MatrixBandClassifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixDimension {
    Engagement,
    Application,
    Interaction,
    Research,
}

impl MatrixDimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Engagement,
            Self::Application,
            Self::Interaction,
            Self::Research,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engagement => "Engagement",
            Self::Application => "Application",
            Self::Interaction => "Interaction",
            Self::Research => "Research",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Engagement => "1. Open Engagement",
            Self::Application => "2. Open Application & Adaptation",
            Self::Interaction => "3. Open Interaction Infrastructure",
            Self::Research => "4. Open Research",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for MatrixDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Y axis: how the dimension was organised structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StructureLevel {
    Regulated = 1,
    Mixed = 2,
    Autonomous = 3,
}

impl StructureLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Regulated, Self::Mixed, Self::Autonomous]
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Regulated => "Rules and decisions were imposed by external or hierarchical actors",
            Self::Mixed => "It was a mix between external rules and self-coordination mechanisms",
            Self::Autonomous => "The structure was generated autonomously by the involved actors",
        }
    }
}

impl TryFrom<u8> for StructureLevel {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Regulated),
            2 => Ok(Self::Mixed),
            3 => Ok(Self::Autonomous),
            other => Err(AnswerError::InvalidStructure(other)),
        }
    }
}

impl From<StructureLevel> for u8 {
    fn from(level: StructureLevel) -> Self {
        level.value()
    }
}

/// One dimension placed on the matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixPoint {
    pub dimension: MatrixDimension,
    /// Mean openness answer, rounded to two decimals.
    pub openness: Option<f64>,
    pub structure: Option<StructureLevel>,
    pub band: MatrixBand,
}

impl MatrixPoint {
    pub fn interpretation(&self) -> String {
        let openness = self
            .openness
            .map(|x| x.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let autonomy = self
            .structure
            .map(|level| level.value().to_string())
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "{}: Openness={} -> {}, Autonomy={}.",
            self.dimension, openness, self.band, autonomy
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRowView {
    #[serde(rename = "Dimension")]
    pub dimension: &'static str,
    #[serde(rename = "X_LevelOpenness(1-3)")]
    pub openness: Option<f64>,
    #[serde(rename = "Y_Regulation→Autonomy(1-3)")]
    pub structure: Option<u8>,
    #[serde(rename = "Band")]
    pub band: &'static str,
}

/// Scored matrix with label positions for the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixAssessment {
    pub points: Vec<MatrixPoint>,
    pub labels: Vec<LabelPlacement>,
}

impl MatrixAssessment {
    pub fn point(&self, dimension: MatrixDimension) -> Option<&MatrixPoint> {
        self.points.iter().find(|point| point.dimension == dimension)
    }

    pub fn rows(&self) -> Vec<MatrixRowView> {
        self.points
            .iter()
            .map(|point| MatrixRowView {
                dimension: point.dimension.label(),
                openness: point.openness,
                structure: point.structure.map(StructureLevel::value),
                band: point.band.label(),
            })
            .collect()
    }
}

/// An answer given either as its score or as the label of the chosen option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MatrixAnswer {
    Score(f64),
    Choice(String),
}

/// Raw Mode B input as submitted by a client or read from a file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatrixSubmission {
    #[serde(default)]
    pub answers: BTreeMap<String, MatrixAnswer>,
    #[serde(default)]
    pub structure: BTreeMap<MatrixDimension, StructureLevel>,
}

impl MatrixSubmission {
    /// Resolves option labels and validates every score on the 1–3 scale.
    pub fn answer_set(&self) -> Result<AnswerSet, AnswerError> {
        let mut answers = AnswerSet::matrix();
        for (variable_id, answer) in &self.answers {
            let dimension = dimension_of(variable_id)
                .ok_or_else(|| AnswerError::UnknownVariable(variable_id.clone()))?;
            let score = match answer {
                MatrixAnswer::Score(score) => *score,
                MatrixAnswer::Choice(label) => questions_for(dimension)
                    .iter()
                    .find(|question| question.variable_id == variable_id.trim())
                    .and_then(|question| question.value_for(label))
                    .ok_or_else(|| AnswerError::UnknownOption {
                        variable_id: variable_id.clone(),
                        label: label.clone(),
                    })?,
            };
            answers.record(variable_id.as_str(), score)?;
        }
        Ok(answers)
    }

    pub fn score(&self) -> Result<MatrixAssessment, AnswerError> {
        score_matrix(&self.answer_set()?, &self.structure)
    }
}

/// Scores the four matrix dimensions from 0.5-step answers and structure choices.
///
/// Answers whose variable id is not part of the Mode B bank are ignored.
pub fn score_matrix(
    answers: &AnswerSet,
    structure: &BTreeMap<MatrixDimension, StructureLevel>,
) -> Result<MatrixAssessment, AnswerError> {
    if answers.scale() != AnswerScale::Matrix {
        return Err(AnswerError::ScaleMismatch {
            expected: AnswerScale::Matrix,
            actual: answers.scale(),
        });
    }

    let classifier = MatrixBandClassifier;
    let points: Vec<MatrixPoint> = MatrixDimension::ordered()
        .into_iter()
        .map(|dimension| {
            let scores: Vec<f64> = questions_for(dimension)
                .iter()
                .filter_map(|question| answers.get(question.variable_id))
                .collect();
            let openness = if scores.is_empty() {
                None
            } else {
                Some(round_score(
                    scores.iter().sum::<f64>() / scores.len() as f64,
                    2,
                ))
            };

            MatrixPoint {
                dimension,
                openness,
                structure: structure.get(&dimension).copied(),
                band: classifier.classify(openness),
            }
        })
        .collect();

    let labels = place_labels(
        points.iter().filter_map(|point| match (point.openness, point.structure) {
            (Some(x), Some(level)) => Some((point.dimension.label(), x, f64::from(level.value()))),
            _ => None,
        }),
        CLUSTER_RADIUS,
    );

    debug!(points = points.len(), labels = labels.len(), "scored openness matrix");

    Ok(MatrixAssessment { points, labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(json: &str) -> MatrixSubmission {
        serde_json::from_str(json).expect("valid submission")
    }

    #[test]
    fn scores_each_dimension_and_bands_it() {
        let submission = submission(
            r#"{
                "answers": {
                    "ENG1": "5 or more sectors",
                    "ENG2": 2.0,
                    "APP1": "mostly free",
                    "APP2": 2,
                    "APP3": "Minimal with weak structure",
                    "RES1": "None",
                    "RES2": 1.5
                },
                "structure": { "engagement": 3, "application": 2, "interaction": 2, "research": 1 }
            }"#,
        );

        let assessment = submission.score().expect("valid answers");
        assert_eq!(assessment.points.len(), 4);

        let engagement = assessment.point(MatrixDimension::Engagement).expect("engagement");
        assert_eq!(engagement.openness, Some(2.5));
        assert_eq!(engagement.band, MatrixBand::High);
        assert_eq!(engagement.structure, Some(StructureLevel::Autonomous));

        let application = assessment.point(MatrixDimension::Application).expect("application");
        assert_eq!(application.openness, Some(2.0));
        assert_eq!(application.band, MatrixBand::Medium);

        let interaction = assessment.point(MatrixDimension::Interaction).expect("interaction");
        assert_eq!(interaction.openness, None);
        assert_eq!(interaction.band, MatrixBand::NotAvailable);

        let research = assessment.point(MatrixDimension::Research).expect("research");
        assert_eq!(research.openness, Some(1.25));
        assert_eq!(research.band, MatrixBand::Closed);
        assert_eq!(
            research.interpretation(),
            "Research: Openness=1.25 -> Closed, Autonomy=1."
        );

        // Interaction has no openness score, so it gets no label.
        assert_eq!(assessment.labels.len(), 3);
        assert!(assessment.labels.iter().all(|label| !label.centered));
    }

    #[test]
    fn coincident_dimensions_share_a_label_ring() {
        let submission = submission(
            r#"{
                "answers": { "ENG1": 2.0, "APP1": 2.0, "INF1": 3.0 },
                "structure": { "engagement": 2, "application": 2, "interaction": 1 }
            }"#,
        );

        let assessment = submission.score().expect("valid answers");
        let centered: Vec<&str> = assessment
            .labels
            .iter()
            .filter(|label| label.centered)
            .map(|label| label.name.as_str())
            .collect();
        assert_eq!(centered, vec!["Engagement", "Application"]);
    }

    #[test]
    fn rejects_unknown_options_and_variables() {
        let err = submission(r#"{ "answers": { "ENG1": "a dozen sectors" } }"#)
            .answer_set()
            .expect_err("unknown option");
        assert!(matches!(err, AnswerError::UnknownOption { .. }));

        let err = submission(r#"{ "answers": { "ON1": 2.0 } }"#)
            .answer_set()
            .expect_err("unknown variable");
        assert_eq!(err, AnswerError::UnknownVariable("ON1".to_string()));

        let err = submission(r#"{ "answers": { "ENG1": 2.25 } }"#)
            .answer_set()
            .expect_err("off-step score");
        assert!(matches!(err, AnswerError::OffStep { .. }));
    }

    #[test]
    fn structure_levels_outside_one_to_three_are_rejected() {
        assert_eq!(StructureLevel::try_from(2u8), Ok(StructureLevel::Mixed));
        assert_eq!(
            StructureLevel::try_from(4u8),
            Err(AnswerError::InvalidStructure(4))
        );
        assert!(serde_json::from_str::<MatrixSubmission>(r#"{ "structure": { "research": 0 } }"#)
            .is_err());
    }

    #[test]
    fn likert_answers_are_not_accepted() {
        let err = score_matrix(&AnswerSet::likert(), &BTreeMap::new()).expect_err("scale mismatch");
        assert_eq!(
            err,
            AnswerError::ScaleMismatch {
                expected: AnswerScale::Matrix,
                actual: AnswerScale::Likert,
            }
        );
    }

    #[test]
    fn every_variable_maps_back_to_its_dimension() {
        for dimension in MatrixDimension::ordered() {
            let questions = questions_for(dimension);
            assert!(!questions.is_empty());
            for question in questions {
                assert_eq!(dimension_of(question.variable_id), Some(dimension));
                assert_eq!(question.options.len(), 5);
            }
        }
        assert_eq!(questions_for(MatrixDimension::Engagement).len(), 6);
        assert_eq!(MatrixDimension::parse(" research "), Some(MatrixDimension::Research));
    }
}
