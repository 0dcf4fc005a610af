use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Qualitative band assigned to a Mode A dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Low,
    Medium,
    High,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::NotAvailable => "N/A",
        }
    }

    /// Attention order for reports: weakest dimensions first.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::NotAvailable => 3,
        }
    }

    /// Case-insensitive parse of a display form. Unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-' | '/'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "na" | "notavailable" => Some(Self::NotAvailable),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One question of the Likert questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub dimension: String,
    pub variable_id: String,
    pub prompt: String,
    /// Anchor text for a score of 1.
    pub scale_low_text: String,
    /// Anchor text for a score of 5.
    pub scale_high_text: String,
}

impl QuestionnaireItem {
    pub fn new(
        dimension: impl Into<String>,
        variable_id: impl Into<String>,
        prompt: impl Into<String>,
        scale_low_text: impl Into<String>,
        scale_high_text: impl Into<String>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            variable_id: variable_id.into(),
            prompt: prompt.into(),
            scale_low_text: scale_low_text.into(),
            scale_high_text: scale_high_text.into(),
        }
    }
}

/// Ordered, immutable list of questionnaire items with unique variable ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    items: Vec<QuestionnaireItem>,
}

impl Questionnaire {
    pub fn new(items: Vec<QuestionnaireItem>) -> Result<Self, QuestionnaireError> {
        let mut seen = HashSet::new();
        for item in &items {
            let variable_id = item.variable_id.trim();
            if variable_id.is_empty() {
                return Err(QuestionnaireError::EmptyVariableId {
                    dimension: item.dimension.clone(),
                });
            }
            if !seen.insert(variable_id.to_string()) {
                return Err(QuestionnaireError::DuplicateVariable(variable_id.to_string()));
            }
        }

        Ok(Self { items })
    }

    /// Wraps reference data whose ids are unique by construction.
    pub(crate) fn from_reference(items: Vec<QuestionnaireItem>) -> Self {
        debug_assert!(Self::new(items.clone()).is_ok());
        Self { items }
    }

    pub fn items(&self) -> &[QuestionnaireItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dimensions in first-appearance order.
    pub fn dimensions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.dimension.as_str())
            .filter(|dimension| seen.insert(*dimension))
            .collect()
    }

    pub fn items_for_dimension<'a>(
        &'a self,
        dimension: &'a str,
    ) -> impl Iterator<Item = &'a QuestionnaireItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.dimension == dimension)
    }

    pub fn item(&self, variable_id: &str) -> Option<&QuestionnaireItem> {
        let variable_id = variable_id.trim();
        self.items
            .iter()
            .find(|item| item.variable_id == variable_id)
    }

    pub fn contains(&self, variable_id: &str) -> bool {
        self.item(variable_id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("variable id {0} appears more than once in the questionnaire")]
    DuplicateVariable(String),
    #[error("an item of dimension {dimension} has an empty variable id")]
    EmptyVariableId { dimension: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(dimension: &str, variable_id: &str) -> QuestionnaireItem {
        QuestionnaireItem::new(dimension, variable_id, "prompt", "low", "high")
    }

    #[test]
    fn dimensions_keep_first_appearance_order() {
        let questionnaire = Questionnaire::new(vec![
            item("OPEN SPACE", "OSp1"),
            item("OPEN DESIGN", "OD1"),
            item("OPEN SPACE", "OSp2"),
            item("OPEN ACCESS", "OA1"),
        ])
        .expect("unique ids");

        assert_eq!(
            questionnaire.dimensions(),
            vec!["OPEN SPACE", "OPEN DESIGN", "OPEN ACCESS"]
        );
        assert_eq!(questionnaire.items_for_dimension("OPEN SPACE").count(), 2);
    }

    #[test]
    fn rejects_duplicate_variable_ids() {
        let err = Questionnaire::new(vec![item("OPEN MIND", "OM1"), item("OPEN USE", "OM1")])
            .expect_err("duplicate id rejected");
        assert_eq!(err, QuestionnaireError::DuplicateVariable("OM1".to_string()));
    }

    #[test]
    fn classification_parse_is_case_insensitive() {
        assert_eq!(Classification::parse(" low "), Some(Classification::Low));
        assert_eq!(Classification::parse("MEDIUM"), Some(Classification::Medium));
        assert_eq!(Classification::parse("High"), Some(Classification::High));
        assert_eq!(Classification::parse("n/a"), Some(Classification::NotAvailable));
        assert_eq!(
            Classification::parse("NotAvailable"),
            Some(Classification::NotAvailable)
        );
        assert_eq!(Classification::parse("Closed"), None);
    }
}
