use super::super::domain::Classification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A banding policy over an aggregate score. `None` means the score is missing.
pub trait Classifier {
    type Band: Copy;

    fn classify(&self, score: Option<f64>) -> Self::Band;
}

/// Mode A policy: `< low` is Low, `<= medium` is Medium, anything above is High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    pub low_threshold: f64,
    pub medium_threshold: f64,
}

impl ThresholdClassifier {
    pub fn new(low_threshold: f64, medium_threshold: f64) -> Self {
        Self {
            low_threshold,
            medium_threshold,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.low_threshold <= self.medium_threshold
    }

    /// Advisory text for misordered thresholds. Classification still applies them as given.
    pub fn warning(&self) -> Option<String> {
        if self.is_ordered() {
            None
        } else {
            Some(format!(
                "medium threshold {} should be >= low threshold {}; adjust thresholds",
                self.medium_threshold, self.low_threshold
            ))
        }
    }
}

impl Classifier for ThresholdClassifier {
    type Band = Classification;

    fn classify(&self, score: Option<f64>) -> Classification {
        classify(score, self.low_threshold, self.medium_threshold)
    }
}

/// Bands a Mode A mean. The low bound is exclusive, the medium bound inclusive.
pub fn classify(mean_score: Option<f64>, low_threshold: f64, medium_threshold: f64) -> Classification {
    match mean_score {
        None => Classification::NotAvailable,
        Some(score) if score.is_nan() => Classification::NotAvailable,
        Some(score) if score < low_threshold => Classification::Low,
        Some(score) if score <= medium_threshold => Classification::Medium,
        Some(_) => Classification::High,
    }
}

/// Band on the Mode B openness axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatrixBand {
    Closed,
    Low,
    Medium,
    High,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl MatrixBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for MatrixBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mode B policy with fixed cut-points on the 1–3 scale, all inclusive from below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixBandClassifier;

impl MatrixBandClassifier {
    pub const HIGH_FROM: f64 = 2.5;
    pub const MEDIUM_FROM: f64 = 2.0;
    pub const LOW_FROM: f64 = 1.5;
}

impl Classifier for MatrixBandClassifier {
    type Band = MatrixBand;

    fn classify(&self, score: Option<f64>) -> MatrixBand {
        match score {
            None => MatrixBand::NotAvailable,
            Some(x) if x.is_nan() => MatrixBand::NotAvailable,
            Some(x) if x >= Self::HIGH_FROM => MatrixBand::High,
            Some(x) if x >= Self::MEDIUM_FROM => MatrixBand::Medium,
            Some(x) if x >= Self::LOW_FROM => MatrixBand::Low,
            Some(_) => MatrixBand::Closed,
        }
    }
}
