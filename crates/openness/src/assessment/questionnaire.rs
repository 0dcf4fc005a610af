use super::domain::{Questionnaire, QuestionnaireItem};

impl Questionnaire {
    /// The embedded APERTO grid: twenty 1–5 items over eight openness dimensions.
    pub fn aperto() -> Self {
        Self::from_reference(aperto_items())
    }
}

fn item(
    dimension: &str,
    variable_id: &str,
    prompt: &str,
    scale_low_text: &str,
    scale_high_text: &str,
) -> QuestionnaireItem {
    QuestionnaireItem::new(dimension, variable_id, prompt, scale_low_text, scale_high_text)
}

fn aperto_items() -> Vec<QuestionnaireItem> {
    vec![
        item(
            "OPEN NETWORK",
            "ON1",
            "How is the partnership regarding new actors?",
            "The partnership is concentrated around a fixed number of actors.",
            "The network is able to connect and integrate new actors into the collaboration.",
        ),
        item(
            "OPEN NETWORK",
            "ON2",
            "How would you characterize the network of stakeholders?",
            "The stakeholder network is centralized: a leader is clearly identified and defines actions.",
            "The stakeholder network is decentralized: no single leader; freedom for action.",
        ),
        item(
            "OPEN NETWORK",
            "ON3",
            "How would you define the management of the innovation process?",
            "Controlled from outside.",
            "Self-management and self-organization.",
        ),
        item(
            "OPEN NETWORK",
            "ON4",
            "How would you define the governance of the innovation partnership?",
            "Governance is unclear with no formalized rules.",
            "Governance is clear, transparent, and effective for all partners.",
        ),
        item(
            "OPEN COMMUNICATION",
            "OC1",
            "How would you define information sharing in the partnership?",
            "Information is unreliable and partners cannot validate it.",
            "All partners trust shared information; it is reliable and complete.",
        ),
        item(
            "OPEN COMMUNICATION",
            "OC2",
            "How would you define the partnership in terms of communication?",
            "Restricted communication: partners have limited access to necessary information.",
            "Open communication: all partners freely access the information they need.",
        ),
        item(
            "OPEN COMMUNICATION",
            "OC3",
            "How would you define data and knowledge documentation?",
            "No shared documentation or ad-hoc fragmented notes.",
            "Shared documentation that is searchable, reusable, and versioned.",
        ),
        item(
            "OPEN DESIGN",
            "OD1",
            "How would you define co-design practices?",
            "Design decided by a small core team with limited consultation.",
            "Multi-actor co-design with early and continuous user/partner feedback.",
        ),
        item(
            "OPEN DESIGN",
            "OD2",
            "How open are the specifications and artifacts?",
            "Specifications/artifacts are closed or only shared case-by-case.",
            "Specifications/artifacts are open and reusable across partners.",
        ),
        item(
            "OPEN SPACE",
            "OSp1",
            "How would you define working spaces and collaboration settings?",
            "Fragmented or private spaces with limited partner access.",
            "Shared, inclusive, accessible spaces (physical/virtual) that foster collaboration.",
        ),
        item(
            "OPEN SPACE",
            "OSp2",
            "How would you define the availability of tools and infrastructure?",
            "Tools/infrastructure are siloed; access is restricted or opaque.",
            "Common toolsets/infrastructure with fair access policies.",
        ),
        item(
            "OPEN USE",
            "OU1",
            "How would you define usage rights for outputs and resources?",
            "Restrictive use; unclear licenses or heavy gatekeeping.",
            "Permissive use by all partners (clear licenses, minimal barriers).",
        ),
        item(
            "OPEN USE",
            "OU2",
            "How would you define reuse and adaptation of outputs?",
            "Outputs are difficult to reuse or adapt.",
            "Outputs are designed for reuse, adaptation, and scaling.",
        ),
        item(
            "OPEN RESEARCH",
            "OR1",
            "How would you define participation in the research process?",
            "Narrow participation; decisions concentrated in a few actors.",
            "Broad, structured participation of stakeholders across stages.",
        ),
        item(
            "OPEN RESEARCH",
            "OR2",
            "How would you define data practices in research?",
            "Data are closed, poorly documented, or hard to access.",
            "Data are FAIR (findable, accessible, interoperable, reusable).",
        ),
        item(
            "OPEN RESEARCH",
            "OR3",
            "How would you define transparency and reproducibility?",
            "Opaque methods; materials/code unavailable.",
            "Transparent methods; shared code/materials for reproducibility.",
        ),
        item(
            "OPEN SOCIETY",
            "OS1",
            "How would you define societal engagement?",
            "Limited or no engagement with affected communities.",
            "Active engagement with communities; inclusive benefits considered.",
        ),
        item(
            "OPEN SOCIETY",
            "OS2",
            "How would you define alignment with public interest?",
            "Public interest is not explicitly considered.",
            "Clear alignment; public value and ethics integrated into decisions.",
        ),
        item(
            "OPEN MIND",
            "OM1",
            "How would you define attitudes toward collaboration and learning?",
            "Low trust; resistance to change or external collaboration.",
            "High trust, curiosity, reflexivity; willingness to learn and adapt.",
        ),
        item(
            "OPEN MIND",
            "OM2",
            "How would you define the culture of feedback?",
            "Feedback is sporadic, defensive, or discouraged.",
            "Constructive feedback loops are institutionalized.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aperto_covers_eight_dimensions_in_definition_order() {
        let questionnaire = Questionnaire::aperto();
        assert_eq!(questionnaire.len(), 20);
        assert_eq!(
            questionnaire.dimensions(),
            vec![
                "OPEN NETWORK",
                "OPEN COMMUNICATION",
                "OPEN DESIGN",
                "OPEN SPACE",
                "OPEN USE",
                "OPEN RESEARCH",
                "OPEN SOCIETY",
                "OPEN MIND",
            ]
        );
        assert_eq!(questionnaire.items_for_dimension("OPEN NETWORK").count(), 4);
    }

    #[test]
    fn aperto_ids_are_unique() {
        let items = Questionnaire::aperto().items().to_vec();
        assert!(Questionnaire::new(items).is_ok());
    }
}
