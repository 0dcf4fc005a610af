use super::domain::{Classification, Questionnaire};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text returned when neither table can answer a lookup.
pub const NO_RECOMMENDATION: &str = "No recommendation available.";

/// Primary lookup: dimension -> classification -> recommendation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationTable {
    entries: BTreeMap<String, BTreeMap<Classification, String>>,
}

impl RecommendationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recommendation set shipped with the APERTO questionnaire.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (dimension, [low, medium, high]) in STANDARD_RECOMMENDATIONS {
            table.insert(dimension, Classification::Low, low);
            table.insert(dimension, Classification::Medium, medium);
            table.insert(dimension, Classification::High, high);
        }
        table
    }

    pub fn insert(
        &mut self,
        dimension: impl Into<String>,
        classification: Classification,
        text: impl Into<String>,
    ) {
        self.entries
            .entry(dimension.into())
            .or_default()
            .insert(classification, text.into());
    }

    pub fn get(&self, dimension: &str, classification: Classification) -> Option<&str> {
        self.entries
            .get(dimension)
            .and_then(|by_class| by_class.get(&classification))
            .map(String::as_str)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Classification-only texts used when a dimension has no dedicated entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackTable {
    entries: BTreeMap<Classification, String>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(
            Classification::Low,
            "Strengthen foundational collaboration mechanisms; set minimum open standards.",
        );
        table.insert(
            Classification::Medium,
            "Standardize what already works (playbooks, templates) and extend it to more partners.",
        );
        table.insert(
            Classification::High,
            "Protect and scale what works: codify practices, mentor new teams, and measure outcomes at larger scope.",
        );
        table
    }

    pub fn insert(&mut self, classification: Classification, text: impl Into<String>) {
        self.entries.insert(classification, text.into());
    }

    pub fn get(&self, classification: Classification) -> Option<&str> {
        self.entries.get(&classification).map(String::as_str)
    }
}

/// Immutable reference data shared by every scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentCatalog {
    pub questionnaire: Questionnaire,
    pub recommendations: RecommendationTable,
    pub fallbacks: FallbackTable,
}

impl AssessmentCatalog {
    pub fn new(
        questionnaire: Questionnaire,
        recommendations: RecommendationTable,
        fallbacks: FallbackTable,
    ) -> Self {
        Self {
            questionnaire,
            recommendations,
            fallbacks,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Questionnaire::aperto(),
            RecommendationTable::standard(),
            FallbackTable::standard(),
        )
    }
}

const STANDARD_RECOMMENDATIONS: [(&str, [&str; 3]); 9] = [
    (
        "OPEN NETWORK",
        [
            "Map missing stakeholders beyond recurrent partners; publish open onboarding (MoUs, light-weight entry rules) and rotate facilitation to avoid centralization.",
            "Consolidate shared governance: mixed committee (university–industry–gov–community), clear decision logs, and periodic inclusion surveys.",
            "Replicate your partner-selection methodology in new territories; publish playbook and capture lessons learned per cycle.",
        ],
    ),
    (
        "OPEN RESEARCH",
        [
            "Run applied-research pilots with producers/extensionists before scaling; co-define success metrics and minimum documentation (protocol + data sheet).",
            "Formalize transfer capabilities: reproducible notebooks, data dictionaries, and short briefs for non-technical audiences.",
            "Open a pipeline for spin-offs and shared IP; align with international partners and create a fund for open replication studies.",
        ],
    ),
    (
        "OPEN ACCESS",
        [
            "Translate technical outputs into accessible formats (how-to guides, infographics) and assign an owner for each public artifact.",
            "Deploy an open repository with versioning and usage analytics; offer short trainings on data use and citation.",
            "Institutionalize default-open policies with exceptions and create a public observatory with regular updates.",
        ],
    ),
    (
        "OPEN DESIGN",
        [
            "Make early co-design sessions mandatory with key user groups; add a simple usability checklist to each iteration.",
            "Standardize participatory protocols for pilots and validations (who, when, feedback loop, change log).",
            "Implement continuous multi-actor feedback with scheduled redesign sprints and traceability from insight → spec change.",
        ],
    ),
    (
        "OPEN SOCIETY",
        [
            "Activate systematic engagement with affected communities; include equity criteria in milestones and feedback capture.",
            "Anchor participatory governance in local/regional regulation; publish roles, rights and escalation paths.",
            "Build autonomous territorial ecosystems with institutional and financial sustainability (local funds + anchor orgs).",
        ],
    ),
    (
        "OPEN MIND",
        [
            "Invest in trust-building and listening spaces; run retrospectives emphasizing learning and shared responsibility.",
            "Offer mindset workshops (lab → entrepreneurship); pair researchers with field practitioners for short rotations.",
            "Consolidate a hybrid culture science–enterprise–community with peer mentoring and recognition for boundary spanners.",
        ],
    ),
    (
        "OPEN SPACE",
        [
            "Enable accessible physical/virtual collaboration spaces; define minimal facilitation and inclusive access rules.",
            "Secure shared infrastructure (labs, makerspaces) with booking transparency and governance of maintenance.",
            "Design multi-functional venues mixing innovation, cultural identity and entrepreneurship with open programming.",
        ],
    ),
    (
        "OPEN COMMUNICATION",
        [
            "Create basic feedback channels and a single source of truth; define information owners and validation steps.",
            "Guarantee traceability of decisions (minutes + rationale); maintain a searchable knowledge base with versioning.",
            "Operate open dashboards with near real-time metrics; automate notifications and API access for partners.",
        ],
    ),
    (
        "OPEN USE",
        [
            "Define minimum shared-use licenses for methods and outputs; clarify what can be reused and by whom.",
            "Modularize: separate patentable from open components to maximize flexibility and adoption.",
            "Promote open-source / open hardware where feasible and provide replication kits for other territories.",
        ],
    ),
];
